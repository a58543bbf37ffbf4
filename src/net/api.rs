//! REST calls to the auth backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: `BrowserTransport` returns `TransportError::Unavailable`
//! since these endpoints are only reachable from the browser page.
//!
//! ERROR HANDLING
//! ==============
//! HTTP status codes are not inspected. The backend answers failures with a
//! JSON envelope under 4xx/5xx, so any decodable body is handed back as an
//! `AuthEnvelope` and only transport or decode failures surface as errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;

use super::types::{AuthEnvelope, CredentialRequest, LoginRequest, SignupRequest};
use crate::config::ClientConfig;

/// Failures below the envelope: the request never produced a usable body.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The response body was not a JSON auth envelope.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// No HTTP stack is available in this build.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Capability to POST a JSON body and decode the auth envelope.
#[async_trait(?Send)]
pub trait AuthTransport {
    async fn post_json(&self, url: &str, body: serde_json::Value) -> Result<AuthEnvelope, TransportError>;
}

/// `fetch`-backed transport used by the pages.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl AuthTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: serde_json::Value) -> Result<AuthEnvelope, TransportError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(&body)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            log::debug!("auth response: url={url} status={}", resp.status());
            resp.json::<AuthEnvelope>()
                .await
                .map_err(|e| TransportError::Parse(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, body);
            Err(TransportError::Unavailable)
        }
    }
}

/// `POST {base}/signup`.
///
/// # Errors
///
/// Returns a `TransportError` if the request fails or the body is not an envelope.
pub async fn post_signup(
    transport: &dyn AuthTransport,
    config: &ClientConfig,
    request: &SignupRequest,
) -> Result<AuthEnvelope, TransportError> {
    post(transport, &config.signup_url(), request).await
}

/// `POST {base}/google-signin`.
///
/// # Errors
///
/// Returns a `TransportError` if the request fails or the body is not an envelope.
pub async fn post_google_signin(
    transport: &dyn AuthTransport,
    config: &ClientConfig,
    request: &CredentialRequest,
) -> Result<AuthEnvelope, TransportError> {
    post(transport, &config.google_signin_url(), request).await
}

/// `POST {base}/login`.
///
/// # Errors
///
/// Returns a `TransportError` if the request fails or the body is not an envelope.
pub async fn post_login(
    transport: &dyn AuthTransport,
    config: &ClientConfig,
    request: &LoginRequest,
) -> Result<AuthEnvelope, TransportError> {
    post(transport, &config.login_url(), request).await
}

async fn post<T: Serialize>(transport: &dyn AuthTransport, url: &str, body: &T) -> Result<AuthEnvelope, TransportError> {
    let body = serde_json::to_value(body).map_err(|e| TransportError::Request(e.to_string()))?;
    log::debug!("auth request: POST {url}");
    transport.post_json(url, body).await
}
