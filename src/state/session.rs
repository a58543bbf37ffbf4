//! Persisted identity for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Other pages of the shop read `userId`, `username` and `userType` straight
//! from `localStorage`, so the three keys are a compatibility surface and are
//! written as a unit: if any write is refused, the entries already written are
//! put back to their previous values. Nothing here clears them; the next
//! successful sign-in overwrites them and the last write wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::net::types::EnvelopeUser;

pub const USER_ID_KEY: &str = "userId";
pub const USERNAME_KEY: &str = "username";
pub const USER_TYPE_KEY: &str = "userType";

/// Every account created or signed in through these pages is a customer.
pub const CUSTOMER_USER_TYPE: &str = "customer";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRecord {
    pub user_id: String,
    pub username: String,
    pub user_type: String,
}

impl SessionRecord {
    pub fn customer(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            user_type: CUSTOMER_USER_TYPE.to_owned(),
        }
    }

    /// Build a record from an envelope user; `None` without an identifier.
    pub fn from_user(user: &EnvelopeUser) -> Option<Self> {
        let user_id = user.identifier()?;
        Some(Self::customer(user_id, user.display_name()))
    }

    /// Signup variant: the username comes from `username` alone, without
    /// the `name` fallback the sign-in routes use.
    pub fn from_signup_user(user: &EnvelopeUser) -> Option<Self> {
        let user_id = user.identifier()?;
        let username = user.username.as_deref().unwrap_or_default();
        Some(Self::customer(user_id, username))
    }

    fn entries(&self) -> [(&'static str, &str); 3] {
        [
            (USER_ID_KEY, self.user_id.as_str()),
            (USERNAME_KEY, self.username.as_str()),
            (USER_TYPE_KEY, self.user_type.as_str()),
        ]
    }

    fn from_lookup(mut get: impl FnMut(&str) -> Option<String>) -> Option<Self> {
        Some(Self {
            user_id: get(USER_ID_KEY)?,
            username: get(USERNAME_KEY)?,
            user_type: get(USER_TYPE_KEY)?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The page has no usable `localStorage` (private mode, native build).
    #[error("local storage unavailable")]
    Unavailable,

    /// A single entry write was refused (quota, security error).
    #[error("storage write failed for {key}: {reason}")]
    Write { key: &'static str, reason: String },
}

/// Key/value persistence for the session record.
pub trait SessionStore {
    /// Write all three entries.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if storage is unavailable or refuses a write.
    fn save(&self, record: &SessionRecord) -> Result<(), StorageError>;

    /// Read the record back; `None` unless all three entries exist.
    fn load(&self) -> Option<SessionRecord>;
}

/// Raw string entries underneath a `SessionStore`.
trait EntryStorage {
    fn get_entry(&self, key: &str) -> Option<String>;

    fn set_entry(&self, key: &str, value: &str) -> Result<(), String>;

    fn remove_entry(&self, key: &str);
}

/// Write all three entries, or none of them.
fn write_entries(storage: &impl EntryStorage, record: &SessionRecord) -> Result<(), StorageError> {
    let entries = record.entries();
    let previous = entries.map(|(key, _)| storage.get_entry(key));

    for (written, (key, value)) in entries.iter().enumerate() {
        if let Err(reason) = storage.set_entry(key, value) {
            for ((key, _), prior) in entries.iter().zip(&previous).take(written) {
                match prior {
                    Some(prior) => {
                        let _ = storage.set_entry(key, prior);
                    }
                    None => storage.remove_entry(key),
                }
            }
            return Err(StorageError::Write { key: *key, reason });
        }
    }
    Ok(())
}

/// `window.localStorage`-backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSession;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "csr")]
impl EntryStorage for web_sys::Storage {
    fn get_entry(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn set_entry(&self, key: &str, value: &str) -> Result<(), String> {
        self.set_item(key, value).map_err(|e| format!("{e:?}"))
    }

    fn remove_entry(&self, key: &str) {
        let _ = self.remove_item(key);
    }
}

impl SessionStore for LocalStorageSession {
    fn save(&self, record: &SessionRecord) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            write_entries(&storage, record)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = record;
            Err(StorageError::Unavailable)
        }
    }

    fn load(&self) -> Option<SessionRecord> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            SessionRecord::from_lookup(|key| storage.get_entry(key))
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}

/// In-memory store; clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl EntryStorage for MemorySessionStore {
    fn get_entry(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn set_entry(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_entry(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, record: &SessionRecord) -> Result<(), StorageError> {
        write_entries(self, record)
    }

    fn load(&self) -> Option<SessionRecord> {
        SessionRecord::from_lookup(|key| self.get(key))
    }
}
