//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded pages apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Whether a guarded page should bounce to sign-in.
///
/// A stored-but-unvalidated token counts as authenticated; a failed
/// validation clears it and the manager navigates on its own.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.authenticated
}

/// Navigate to `sign_in_route` if `state` should bounce. Returns whether it did.
pub fn redirect_if_signed_out<F>(state: &SessionState, sign_in_route: &str, navigate: F) -> bool
where
    F: Fn(&str),
{
    let redirect = should_redirect_unauth(state);
    if redirect {
        navigate(sign_in_route);
    }
    redirect
}

/// Bounce to `sign_in_route` if the page mounts without a session.
///
/// Checked once on mount only. Later transitions (logout, rejected token)
/// already navigate from the session manager.
pub fn install_unauth_redirect<F>(state: Signal<SessionState>, sign_in_route: String, navigate: F)
where
    F: Fn(&str) + 'static,
{
    Effect::new(move || {
        state.with_untracked(|s| redirect_if_signed_out(s, &sign_in_route, &navigate));
    });
}
