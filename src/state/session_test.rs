use super::*;

#[test]
fn customer_record_has_fixed_user_type() {
    let record = SessionRecord::customer("42", "alice");
    assert_eq!(record.user_type, "customer");
}

#[test]
fn from_user_uses_identifier_and_display_name_fallbacks() {
    let user = EnvelopeUser {
        user_id: Some("7".to_owned()),
        name: Some("Bob".to_owned()),
        ..EnvelopeUser::default()
    };
    assert_eq!(SessionRecord::from_user(&user), Some(SessionRecord::customer("7", "Bob")));
}

#[test]
fn from_user_without_identifier_is_none() {
    let user = EnvelopeUser { username: Some("alice".to_owned()), ..EnvelopeUser::default() };
    assert_eq!(SessionRecord::from_user(&user), None);
}

#[test]
fn from_signup_user_ignores_name() {
    let user = EnvelopeUser {
        id: Some("5".to_owned()),
        name: Some("Bob".to_owned()),
        ..EnvelopeUser::default()
    };
    assert_eq!(SessionRecord::from_signup_user(&user), Some(SessionRecord::customer("5", "")));
}

#[test]
fn memory_store_writes_three_flat_entries() {
    let store = MemorySessionStore::new();
    store.save(&SessionRecord::customer("42", "alice")).unwrap();
    assert_eq!(store.get("userId").as_deref(), Some("42"));
    assert_eq!(store.get("username").as_deref(), Some("alice"));
    assert_eq!(store.get("userType").as_deref(), Some("customer"));
}

#[test]
fn memory_store_last_write_wins() {
    let store = MemorySessionStore::new();
    store.save(&SessionRecord::customer("1", "first")).unwrap();
    store.save(&SessionRecord::customer("2", "second")).unwrap();
    assert_eq!(store.load(), Some(SessionRecord::customer("2", "second")));
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemorySessionStore::new();
    let other = store.clone();
    other.save(&SessionRecord::customer("9", "zed")).unwrap();
    assert!(!store.is_empty());
    assert_eq!(store.load().map(|r| r.user_id), Some("9".to_owned()));
}

#[test]
fn empty_memory_store_loads_nothing() {
    assert_eq!(MemorySessionStore::new().load(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_unavailable_natively() {
    let store = LocalStorageSession;
    assert!(matches!(
        store.save(&SessionRecord::customer("1", "a")),
        Err(StorageError::Unavailable)
    ));
    assert_eq!(store.load(), None);
}

// =============================================================
// All-or-nothing writes
// =============================================================

/// Storage that refuses writes to one key, like a quota error mid-record.
struct RefusingStorage {
    inner: MemorySessionStore,
    refuse: &'static str,
}

impl EntryStorage for RefusingStorage {
    fn get_entry(&self, key: &str) -> Option<String> {
        self.inner.get_entry(key)
    }

    fn set_entry(&self, key: &str, value: &str) -> Result<(), String> {
        if key == self.refuse {
            return Err("QuotaExceededError".to_owned());
        }
        self.inner.set_entry(key, value)
    }

    fn remove_entry(&self, key: &str) {
        self.inner.remove_entry(key);
    }
}

#[test]
fn refused_write_restores_previous_record() {
    let inner = MemorySessionStore::new();
    inner.save(&SessionRecord::customer("1", "first")).unwrap();
    let storage = RefusingStorage { inner: inner.clone(), refuse: USER_TYPE_KEY };

    let err = write_entries(&storage, &SessionRecord::customer("2", "second")).unwrap_err();

    assert!(matches!(err, StorageError::Write { key: "userType", .. }));
    assert_eq!(inner.load(), Some(SessionRecord::customer("1", "first")));
}

#[test]
fn refused_write_on_fresh_storage_leaves_no_entries() {
    let inner = MemorySessionStore::new();
    let storage = RefusingStorage { inner: inner.clone(), refuse: USERNAME_KEY };

    write_entries(&storage, &SessionRecord::customer("2", "second")).unwrap_err();

    assert!(inner.is_empty());
}
