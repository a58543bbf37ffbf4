//! Signup, login and federated sign-in flows.
//!
//! ARCHITECTURE
//! ============
//! `AuthFlows` bundles the page's capabilities (transport, session store,
//! error surface, window host) behind trait objects, so the same flow code
//! runs against the browser in `pages` and against in-memory fakes in tests.
//! Each flow is one best-effort attempt: validate, POST, interpret the
//! envelope, then either persist + acknowledge + redirect or show one error.
//!
//! A session record is written only for a truthy `success` whose `user`
//! carries an identifier. Overlapping flows write the same storage keys and
//! the last write wins.

#[cfg(test)]
mod test_support;

mod federated;
mod login;
mod signup;

pub use federated::CredentialResponse;

use std::rc::Rc;

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::net::api::{AuthTransport, BrowserTransport, TransportError};
use crate::net::types::AuthEnvelope;
use crate::state::session::{LocalStorageSession, SessionRecord, SessionStore, StorageError};
use crate::util::error_region::ErrorSurface;
use crate::util::host::{BrowserHost, WindowHost};
use crate::util::validate::{SignupForm, ValidationError};

pub const CONNECTION_ERROR: &str = "Error connecting to server. Please try again.";
pub const SIGNUP_FAILED: &str = "Signup failed. Please try again.";
pub const GOOGLE_SIGNIN_FAILED: &str = "Google Sign-In failed. Please try again.";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

pub const SIGNUP_ACK: &str = "Sign-up successful! Redirecting to login page...";
pub const GOOGLE_SIGNIN_ACK: &str = "Google Sign-In successful!";
pub const LOGIN_ACK: &str = "Login successful!";

// =============================================================================
// ERROR
// =============================================================================

/// Why an auth attempt ended without a redirect.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A form rule failed; no request was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The backend could not be reached or answered with something other than an envelope.
    #[error("transport: {0}")]
    Transport(#[from] TransportError),

    /// The backend answered with a falsy `success`.
    #[error("rejected by backend: {}", .message.as_deref().unwrap_or("<no message>"))]
    Rejected { message: Option<String> },

    /// The session record could not be written.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// The identity-provider callback carried no credential.
    #[error("identity provider callback without credential")]
    MissingCredential,
}

impl AuthError {
    fn rejected(envelope: &AuthEnvelope) -> Self {
        Self::Rejected { message: envelope.message().map(str::to_owned) }
    }

    /// Text for the error region; `fallback` stands in when the backend gave no message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Invalid(err) => err.to_string(),
            Self::Transport(_) | Self::Storage(_) => CONNECTION_ERROR.to_owned(),
            Self::Rejected { message: Some(message) } => message.clone(),
            Self::Rejected { message: None } | Self::MissingCredential => fallback.to_owned(),
        }
    }
}

// =============================================================================
// FLOWS
// =============================================================================

/// Outcome of a completed flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSuccess {
    /// Record written to storage, if the envelope identified the user.
    pub session: Option<SessionRecord>,
    /// Location the browser was sent to.
    pub redirect_to: String,
}

/// Entry points the hosting page wires to its submit action and to the
/// identity provider's callback.
#[async_trait(?Send)]
pub trait AuthHandlers {
    /// Signup form submitted.
    ///
    /// # Errors
    ///
    /// Returns the `AuthError` already shown in the error region.
    async fn on_submit(&self, form: SignupForm) -> Result<AuthSuccess, AuthError>;

    /// Identity provider callback fired.
    ///
    /// # Errors
    ///
    /// Returns the `AuthError` already shown in the error region.
    async fn on_credential(&self, response: CredentialResponse) -> Result<AuthSuccess, AuthError>;
}

#[derive(Clone)]
pub struct AuthFlows {
    config: Rc<ClientConfig>,
    transport: Rc<dyn AuthTransport>,
    store: Rc<dyn SessionStore>,
    errors: Rc<dyn ErrorSurface>,
    host: Rc<dyn BrowserHost>,
}

impl AuthFlows {
    pub fn new(
        config: ClientConfig,
        transport: Rc<dyn AuthTransport>,
        store: Rc<dyn SessionStore>,
        errors: Rc<dyn ErrorSurface>,
        host: Rc<dyn BrowserHost>,
    ) -> Self {
        Self { config: Rc::new(config), transport, store, errors, host }
    }

    /// Flows wired to `fetch`, `localStorage` and the window, reporting into `errors`.
    pub fn browser(errors: impl ErrorSurface + 'static) -> Self {
        Self::new(
            ClientConfig::default(),
            Rc::new(BrowserTransport),
            Rc::new(LocalStorageSession),
            Rc::new(errors),
            Rc::new(WindowHost),
        )
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Write `record`, or skip when the user carried no identifier.
    fn persist(&self, record: Option<SessionRecord>) -> Result<Option<SessionRecord>, AuthError> {
        let Some(record) = record else {
            log::warn!("auth succeeded without a user identifier; session not stored");
            return Ok(None);
        };
        self.store.save(&record)?;
        log::info!("session stored: user_id={} username={}", record.user_id, record.username);
        Ok(Some(record))
    }

    /// Acknowledge and navigate away.
    fn finish(&self, session: Option<SessionRecord>, ack: &str, location: &str) -> AuthSuccess {
        self.host.acknowledge(ack);
        self.host.redirect(location);
        AuthSuccess { session, redirect_to: location.to_owned() }
    }

    /// Shared tail of the login and federated flows: a truthy `success` with
    /// a `user` persists and goes home, anything else is a rejection.
    fn sign_in_home(&self, envelope: &AuthEnvelope, ack: &str) -> Result<AuthSuccess, AuthError> {
        let user = match (envelope.success, envelope.user.as_ref()) {
            (true, Some(user)) => user,
            _ => return Err(AuthError::rejected(envelope)),
        };
        let session = self.persist(SessionRecord::from_user(user))?;
        Ok(self.finish(session, ack, &self.config.home_location))
    }

    /// Route a failed attempt to the error region and the log.
    fn settle(
        &self,
        flow: &str,
        result: Result<AuthSuccess, AuthError>,
        fallback: &str,
    ) -> Result<AuthSuccess, AuthError> {
        if let Err(err) = &result {
            match err {
                AuthError::Transport(e) => log::warn!("{flow} request failed: {e}"),
                AuthError::Storage(e) => log::error!("{flow} session write failed: {e}"),
                AuthError::Rejected { .. } | AuthError::MissingCredential => log::info!("{flow}: {err}"),
                AuthError::Invalid(_) => {}
            }
            self.errors.show_error(&err.user_message(fallback));
        }
        result
    }
}

#[async_trait(?Send)]
impl AuthHandlers for AuthFlows {
    async fn on_submit(&self, form: SignupForm) -> Result<AuthSuccess, AuthError> {
        self.signup(&form).await
    }

    async fn on_credential(&self, response: CredentialResponse) -> Result<AuthSuccess, AuthError> {
        self.google_sign_in(response).await
    }
}
