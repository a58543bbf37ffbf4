//! Username-or-email login: `POST /login`, then home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::{AuthError, AuthFlows, AuthSuccess, LOGIN_ACK, LOGIN_FAILED};
use crate::net::api::post_login;
use crate::util::validate::{LoginForm, validate_login};

impl AuthFlows {
    /// Validate `form`, sign in and redirect home.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` for an empty field, transport failure,
    /// backend rejection or storage failure.
    pub async fn login(&self, form: &LoginForm) -> Result<AuthSuccess, AuthError> {
        self.errors.clear();
        let result = self.try_login(form).await;
        self.settle("login", result, LOGIN_FAILED)
    }

    async fn try_login(&self, form: &LoginForm) -> Result<AuthSuccess, AuthError> {
        let request = validate_login(form)?;
        let envelope = post_login(self.transport.as_ref(), &self.config, &request).await?;
        self.sign_in_home(&envelope, LOGIN_ACK)
    }
}
