//! Session manager: the single writer of [`SessionState`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `login`, `register` and `logout`; the provider calls
//! `initialize` once per page load. Everything else reads the state through
//! the read-only signal and memos exposed here.
//!
//! STALE RESPONSES
//! ===============
//! The generation counter advances whenever the session state is written
//! (logout, successful login, successful validation). An async operation
//! records the generation when it starts, and its response is applied only if
//! the state has not been written since and the hosting scope is still alive.
//! A login answered after the user already logged out therefore never
//! resurrects the session, while a failed login or a registration leaves a
//! pending validation free to complete.
//!
//! ERROR HANDLING
//! ==============
//! Login and registration failures are logged and swallowed: state and
//! storage stay exactly as they were. Only a failed startup validation has a
//! recovery action, which is a full logout.

#[cfg(test)]
#[path = "session_manager_test.rs"]
mod session_manager_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{debug, error, info, warn};

use crate::config::SessionRoutes;
use crate::net::api::AuthApi;
use crate::net::types::{LoginRequest, RegisterRequest, User};
use crate::state::session::SessionState;
use crate::util::navigation::Navigator;
use crate::util::token_store::TokenStore;

/// Shared flag cleared when the scope hosting a manager is torn down.
///
/// `Send + Sync` so it can be captured by reactive cleanup callbacks.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Mark the scope as gone. In-flight responses are dropped from now on.
    pub fn retire(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Ticket(u64);

struct Inner {
    api: Rc<dyn AuthApi>,
    store: Rc<dyn TokenStore>,
    navigator: Rc<dyn Navigator>,
    routes: SessionRoutes,
    generation: Cell<u64>,
    liveness: Liveness,
    /// Token read at construction, consumed by the first `initialize`.
    startup_token: RefCell<Option<String>>,
}

/// Cheap to clone; clones share state, storage and in-flight bookkeeping.
#[derive(Clone)]
pub struct SessionManager {
    inner: Rc<Inner>,
    state: RwSignal<SessionState>,
    is_authenticated: Memo<bool>,
    user: Memo<Option<User>>,
}

impl SessionManager {
    /// Build a manager and read the stored token.
    ///
    /// A stored token makes the session provisionally authenticated until
    /// [`SessionManager::initialize`] confirms or rejects it.
    pub fn new(
        api: Rc<dyn AuthApi>,
        store: Rc<dyn TokenStore>,
        navigator: Rc<dyn Navigator>,
        routes: SessionRoutes,
    ) -> Self {
        let startup_token = store.load();
        let state = RwSignal::new(SessionState::from_stored_token(startup_token.is_some()));
        let is_authenticated = Memo::new(move |_| state.with(|s| s.authenticated));
        let user = Memo::new(move |_| state.with(|s| s.user.clone()));

        Self {
            inner: Rc::new(Inner {
                api,
                store,
                navigator,
                routes,
                generation: Cell::new(0),
                liveness: Liveness::new(),
                startup_token: RefCell::new(startup_token),
            }),
            state,
            is_authenticated,
            user,
        }
    }

    /// Read-only view of the full session state.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Untracked copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn is_authenticated(&self) -> Memo<bool> {
        self.is_authenticated
    }

    pub fn user(&self) -> Memo<Option<User>> {
        self.user
    }

    pub fn routes(&self) -> &SessionRoutes {
        &self.inner.routes
    }

    pub fn liveness(&self) -> Liveness {
        self.inner.liveness.clone()
    }

    /// Validate the token found at construction by fetching the current user.
    ///
    /// Without a stored token this issues no request. Any failure performs a
    /// full [`SessionManager::logout`]. Only the first call does anything.
    pub async fn initialize(&self) {
        let ticket = self.ticket();
        let Some(token) = self.inner.startup_token.borrow_mut().take() else {
            debug!("no stored token; session starts signed out");
            return;
        };

        let result = self.inner.api.fetch_current_user(&token).await;
        if !self.accept(ticket, "session validation") {
            return;
        }
        match result {
            Ok(user) => {
                info!("session restored for {}", user.username);
                self.advance();
                self.apply(SessionState::signed_in(user));
            }
            Err(err) => {
                warn!("stored token rejected: {err}");
                self.logout();
            }
        }
    }

    /// Exchange credentials for a token, persist it and land on the home route.
    ///
    /// Failures are logged; state and storage are left untouched.
    pub async fn login(&self, email: &str, password: &str) {
        let ticket = self.ticket();
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };

        let response = match self.inner.api.login(&request).await {
            Ok(response) => response,
            Err(err) => {
                error!("login failed: {err}");
                return;
            }
        };
        if !self.accept(ticket, "login") {
            return;
        }
        if let Err(err) = self.inner.store.save(&response.token) {
            error!("login failed: {err}");
            return;
        }

        info!("signed in as {}", response.user.username);
        self.advance();
        self.apply(SessionState::signed_in(response.user));
        self.inner.navigator.navigate(&self.inner.routes.landing);
    }

    /// Create an account and send the user to sign in. Never authenticates.
    pub async fn register(&self, username: &str, email: &str, password: &str, confirm_password: &str, name: &str) {
        let ticket = self.ticket();
        let request = RegisterRequest {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            confirm_password: confirm_password.to_owned(),
            name: name.to_owned(),
        };

        match self.inner.api.register(&request).await {
            Ok(body) => {
                if !self.accept(ticket, "registration") {
                    return;
                }
                info!("registration successful: {body}");
                self.inner.navigator.navigate(&self.inner.routes.sign_in);
            }
            Err(err) => error!("registration failed: {err}"),
        }
    }

    /// Drop the token and profile, then go to sign-in. Safe to repeat.
    pub fn logout(&self) {
        self.advance();
        if let Err(err) = self.inner.store.clear() {
            warn!("{err}; the stored token will be revalidated on next load");
        }
        self.apply(SessionState::signed_out());
        info!("signed out");
        self.inner.navigator.navigate(&self.inner.routes.sign_in);
    }

    fn ticket(&self) -> Ticket {
        Ticket(self.inner.generation.get())
    }

    fn advance(&self) {
        self.inner.generation.set(self.inner.generation.get().wrapping_add(1));
    }

    fn accept(&self, ticket: Ticket, what: &str) -> bool {
        if !self.inner.liveness.is_alive() {
            debug!("dropping {what} response: session scope retired");
            return false;
        }
        if self.inner.generation.get() != ticket.0 {
            debug!("dropping {what} response: session state changed since the request started");
            return false;
        }
        true
    }

    fn apply(&self, next: SessionState) {
        // A disposed signal reads as `None`; there is nobody left to notify.
        if self.state.try_with_untracked(|current| *current != next).unwrap_or(false) {
            self.state.set(next);
        }
    }
}
