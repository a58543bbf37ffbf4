//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! The backend answers every auth route with the same loosely-typed envelope
//! (`success`, optional `message`, optional `user`). Deserialization absorbs
//! the looseness here (truthy flags, numeric ids) so flow code only ever sees
//! plain `bool` and `Option<String>` values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /login`. `username` may also hold an email address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /google-signin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CredentialRequest {
    pub credential: String,
}

/// Response envelope shared by all auth endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthEnvelope {
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<EnvelopeUser>,
}

impl AuthEnvelope {
    /// Server-supplied message, treating an empty string as absent.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Identity payload carried by a successful envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EnvelopeUser {
    #[serde(default, deserialize_with = "deserialize_identifier")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_identifier")]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl EnvelopeUser {
    /// Preferred identifier: `user_id`, then `id`.
    pub fn identifier(&self) -> Option<&str> {
        self.user_id.as_deref().or(self.id.as_deref())
    }

    /// Preferred display name: `username`, then `name`, then empty.
    pub fn display_name(&self) -> &str {
        [self.username.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|n| !n.is_empty())
            .unwrap_or_default()
    }
}

/// JavaScript truthiness for a JSON value.
pub(crate) fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        serde_json::Value::String(text) => !text.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

fn deserialize_identifier<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) if text.is_empty() => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        // Zero is falsy, so `user_id || id` skips it like an empty string.
        serde_json::Value::Number(number) if number.as_f64() == Some(0.0) => Ok(None),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int.to_string()));
            }
            if let Some(int) = number.as_u64() {
                return Ok(Some(int.to_string()));
            }
            Ok(Some(number.to_string()))
        }
        _ => Err(D::Error::custom("expected string or number identifier")),
    }
}
