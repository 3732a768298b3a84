//! Wire DTOs for the authentication API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON exactly. The one divergence from Rust
//! naming on the client side is `confirm_password`, which is already
//! snake_case on the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/api/auth/me` and the login endpoint.
///
/// Replaced wholesale on every successful fetch; never patched in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier, when the endpoint includes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Login handle.
    pub username: String,
    pub email: String,
    /// Display name.
    pub name: String,
}

/// Body of `POST /admin/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful response from `POST /admin/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token.
    pub token: String,
    pub user: User,
}

/// Body of `POST /admin/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
}
