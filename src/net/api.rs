//! REST calls against the authentication API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! [`ApiError::Unavailable`], since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses both surface as `ApiError`; the
//! session manager decides which of them it swallows.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{LoginRequest, LoginResponse, RegisterRequest, User};
use crate::config::SessionConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server rejected request: {status}")]
    Status { status: u16 },

    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),

    /// No HTTP backend in this build.
    #[error("not available on server")]
    Unavailable,
}

/// The three calls the session manager makes. Enables mocking in tests.
///
/// Futures are `?Send`: browser fetch futures are tied to the JS event loop.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange a bearer token for the current user's profile.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the token is rejected or the call fails.
    async fn fetch_current_user(&self, token: &str) -> Result<User, ApiError>;

    /// Submit credentials and receive a token plus profile.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on bad credentials or transport failure.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Create an account. The response body is informational only.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the server rejects the registration.
    async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value, ApiError>;
}

/// `AuthApi` backed by the browser's fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpAuthApi {
    me_url: String,
    login_url: String,
    register_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &SessionConfig) -> Self {
        Self { me_url: config.me_url(), login_url: config.login_url(), register_url: config.register_url() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Interpret a response body that may or may not be JSON.
#[cfg(any(test, feature = "hydrate"))]
fn body_to_value(body: String) -> serde_json::Value {
    serde_json::from_str(&body).unwrap_or_else(|_| serde_json::Value::String(body))
}

#[cfg(feature = "hydrate")]
fn checked(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() { Ok(resp) } else { Err(ApiError::Status { status: resp.status() }) }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn fetch_current_user(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.me_url)
                .header("Authorization", &bearer_header(token))
                .send()
                .await
                .map_err(transport)?;
            let resp = checked(resp)?;
            resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, &self.me_url);
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.login_url)
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let resp = checked(resp)?;
            resp.json::<LoginResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &self.login_url);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.register_url)
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let resp = checked(resp)?;
            let body = resp.text().await.map_err(transport)?;
            Ok(body_to_value(body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &self.register_url);
            Err(ApiError::Unavailable)
        }
    }
}
