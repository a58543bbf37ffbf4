//! In-memory capabilities for driving flows in tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::AuthFlows;
use crate::config::ClientConfig;
use crate::net::api::{AuthTransport, TransportError};
use crate::net::types::AuthEnvelope;
use crate::state::session::{MemorySessionStore, SessionRecord, SessionStore, StorageError};
use crate::util::error_region::ErrorSurface;
use crate::util::host::BrowserHost;

/// Replies with queued raw JSON bodies (or errors) and records each request.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<serde_json::Value, TransportError>>>,
    pub requests: RefCell<Vec<(String, serde_json::Value)>>,
}

impl ScriptedTransport {
    pub fn reply(&self, body: serde_json::Value) {
        self.replies.borrow_mut().push_back(Ok(body));
    }

    pub fn fail(&self, err: TransportError) {
        self.replies.borrow_mut().push_back(Err(err));
    }
}

#[async_trait(?Send)]
impl AuthTransport for ScriptedTransport {
    async fn post_json(&self, url: &str, body: serde_json::Value) -> Result<AuthEnvelope, TransportError> {
        self.requests.borrow_mut().push((url.to_owned(), body));
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no scripted reply".to_owned())));
        serde_json::from_value(reply?).map_err(|e| TransportError::Parse(e.to_string()))
    }
}

#[derive(Default)]
pub struct RecordingSurface {
    pub shown: RefCell<Vec<String>>,
    pub clears: RefCell<usize>,
}

impl ErrorSurface for RecordingSurface {
    fn show_error(&self, message: &str) {
        self.shown.borrow_mut().push(message.to_owned());
    }

    fn clear(&self) {
        *self.clears.borrow_mut() += 1;
    }
}

#[derive(Default)]
pub struct RecordingHost {
    pub acks: RefCell<Vec<String>>,
    pub redirects: RefCell<Vec<String>>,
}

impl BrowserHost for RecordingHost {
    fn acknowledge(&self, message: &str) {
        self.acks.borrow_mut().push(message.to_owned());
    }

    fn redirect(&self, location: &str) {
        self.redirects.borrow_mut().push(location.to_owned());
    }
}

/// Store whose writes always fail.
pub struct FullStore;

impl SessionStore for FullStore {
    fn save(&self, _record: &SessionRecord) -> Result<(), StorageError> {
        Err(StorageError::Write { key: "userId", reason: "QuotaExceededError".to_owned() })
    }

    fn load(&self) -> Option<SessionRecord> {
        None
    }
}

pub struct Harness {
    pub flows: AuthFlows,
    pub transport: Rc<ScriptedTransport>,
    pub store: MemorySessionStore,
    pub errors: Rc<RecordingSurface>,
    pub host: Rc<RecordingHost>,
}

impl Harness {
    pub fn new() -> Self {
        let store = MemorySessionStore::new();
        Self::with_store(store.clone(), Rc::new(store))
    }

    pub fn with_full_store() -> Self {
        Self::with_store(MemorySessionStore::new(), Rc::new(FullStore))
    }

    fn with_store(store: MemorySessionStore, backing: Rc<dyn SessionStore>) -> Self {
        let transport = Rc::new(ScriptedTransport::default());
        let errors = Rc::new(RecordingSurface::default());
        let host = Rc::new(RecordingHost::default());
        let flows = AuthFlows::new(ClientConfig::default(), transport.clone(), backing, errors.clone(), host.clone());
        Self { flows, transport, store, errors, host }
    }

    pub fn shown(&self) -> Vec<String> {
        self.errors.shown.borrow().clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.host.redirects.borrow().clone()
    }

    pub fn acks(&self) -> Vec<String> {
        self.host.acks.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.transport.requests.borrow().len()
    }
}
