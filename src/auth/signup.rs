//! Account creation: `POST /signup`, then on to the login page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use super::{AuthError, AuthFlows, AuthSuccess, SIGNUP_ACK, SIGNUP_FAILED};
use crate::net::api::post_signup;
use crate::state::session::SessionRecord;
use crate::util::validate::{SignupForm, validate_signup};

impl AuthFlows {
    /// Validate `form`, create the account and redirect to the login page.
    ///
    /// Clears the error region first; any failure is shown there before it
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` for a failing form rule, transport failure,
    /// backend rejection or storage failure.
    pub async fn signup(&self, form: &SignupForm) -> Result<AuthSuccess, AuthError> {
        self.errors.clear();
        let result = self.try_signup(form).await;
        self.settle("signup", result, SIGNUP_FAILED)
    }

    async fn try_signup(&self, form: &SignupForm) -> Result<AuthSuccess, AuthError> {
        let request = validate_signup(form)?;
        let envelope = post_signup(self.transport.as_ref(), &self.config, &request).await?;
        if !envelope.success {
            return Err(AuthError::rejected(&envelope));
        }

        // A success without `user` still counts as a created account.
        let session = match envelope.user.as_ref() {
            Some(user) => self.persist(SessionRecord::from_signup_user(user))?,
            None => {
                log::warn!("signup succeeded without a user payload; session not stored");
                None
            }
        };
        Ok(self.finish(session, SIGNUP_ACK, &self.config.login_location))
    }
}
