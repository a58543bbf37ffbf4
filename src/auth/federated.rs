//! Sign-in through the identity provider's callback.
//!
//! The provider SDK hands the page an object carrying an opaque `credential`
//! token. The token is never inspected here; the backend verifies it at
//! `POST /google-signin`.

#[cfg(test)]
#[path = "federated_test.rs"]
mod federated_test;

use serde::Deserialize;

use super::{AuthError, AuthFlows, AuthSuccess, GOOGLE_SIGNIN_ACK, GOOGLE_SIGNIN_FAILED};
use crate::net::api::post_google_signin;
use crate::net::types::CredentialRequest;

/// The provider callback payload. Other fields it carries are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CredentialResponse {
    #[serde(default)]
    pub credential: Option<String>,
}

impl CredentialResponse {
    pub fn new(credential: impl Into<String>) -> Self {
        Self { credential: Some(credential.into()) }
    }
}

impl AuthFlows {
    /// Forward the provider credential for verification and go home.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` for a missing credential, transport failure,
    /// backend rejection or storage failure.
    pub async fn google_sign_in(&self, response: CredentialResponse) -> Result<AuthSuccess, AuthError> {
        let result = self.try_google_sign_in(response).await;
        self.settle("google sign-in", result, GOOGLE_SIGNIN_FAILED)
    }

    async fn try_google_sign_in(&self, response: CredentialResponse) -> Result<AuthSuccess, AuthError> {
        let credential = response
            .credential
            .filter(|c| !c.is_empty())
            .ok_or(AuthError::MissingCredential)?;
        let envelope =
            post_google_signin(self.transport.as_ref(), &self.config, &CredentialRequest { credential }).await?;
        self.sign_in_home(&envelope, GOOGLE_SIGNIN_ACK)
    }
}
