//! Client-side checks run before any auth request is sent.
//!
//! Rules short-circuit in a fixed order so the user always sees the first
//! problem only. Username and email are trimmed; passwords are taken verbatim.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use regex::Regex;

use crate::net::types::{LoginRequest, SignupRequest};

pub const MIN_PASSWORD_CHARS: usize = 6;

/// Raw signup form values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Raw login form values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingField,

    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// `local@domain.tld` shape: no whitespace or extra `@` in any part.
pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_ok_and(|re| re.is_match(email))
}

/// Validate the signup form and build the request body.
///
/// # Errors
///
/// Returns the first failing rule: missing field, short password,
/// confirmation mismatch, then email shape.
pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, ValidationError> {
    let username = form.username.trim();
    let email = form.email.trim();

    if username.is_empty() || email.is_empty() || form.password.is_empty() || form.confirm_password.is_empty() {
        return Err(ValidationError::MissingField);
    }
    // Counted in UTF-16 code units, as the browser's `String.length` does.
    if form.password.encode_utf16().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(SignupRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

/// Validate the login form. The username field also accepts an email.
///
/// # Errors
///
/// Returns `MissingField` if either value is empty.
pub fn validate_login(form: &LoginForm) -> Result<LoginRequest, ValidationError> {
    let username = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        return Err(ValidationError::MissingField);
    }
    Ok(LoginRequest { username: username.to_owned(), password: form.password.clone() })
}
