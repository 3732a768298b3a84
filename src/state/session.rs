//! Session value tracking the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and user-aware components; written only by
//! [`crate::state::session_manager::SessionManager`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// `authenticated` implies a stored token. `user` is only set once the
/// server has confirmed that token (startup validation or login).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<User>,
}

impl SessionState {
    /// State before validation: authenticated iff a token was found.
    pub fn from_stored_token(has_token: bool) -> Self {
        Self { authenticated: has_token, user: None }
    }

    pub fn signed_in(user: User) -> Self {
        Self { authenticated: true, user: Some(user) }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Authenticated on the strength of a stored token, profile not yet fetched.
    pub fn is_pending_validation(&self) -> bool {
        self.authenticated && self.user.is_none()
    }
}
