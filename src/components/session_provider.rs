//! Session scope: makes one [`SessionManager`] available to a component subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionProvider` sits inside the `Router` (navigation needs it) and above
//! every page. Pages reach the manager with [`use_session`]; helpers that get
//! a `SessionManager` passed in explicitly do not need the context at all.
//!
//! DESIGN
//! ======
//! The manager holds `Rc` internals, so it is stored with
//! `StoredValue::new_local` to satisfy the thread-safe context map.

#[cfg(test)]
#[path = "session_provider_test.rs"]
mod session_provider_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::SessionConfig;
use crate::net::api::HttpAuthApi;
use crate::state::session_manager::SessionManager;
use crate::util::navigation::RouterNavigator;
use crate::util::token_store::LocalStorageTokenStore;

type SessionHandle = StoredValue<SessionManager, LocalStorage>;

const OUTSIDE_SCOPE: &str = "use_session must be used within a SessionProvider";

/// Provide `manager` to the current reactive owner and its descendants.
///
/// The manager is retired when the owner is cleaned up, so responses still
/// in flight at that point are dropped.
pub fn provide_session(manager: SessionManager) {
    let liveness = manager.liveness();
    on_cleanup(move || liveness.retire());
    provide_context::<SessionHandle>(StoredValue::new_local(manager));
}

/// The session manager in scope, if any.
pub fn try_use_session() -> Option<SessionManager> {
    use_context::<SessionHandle>().and_then(|handle| handle.try_with_value(SessionManager::clone))
}

/// The session manager in scope.
///
/// # Panics
///
/// Panics when called outside a [`SessionProvider`]; that is a wiring bug,
/// not a runtime condition.
pub fn use_session() -> SessionManager {
    try_use_session().unwrap_or_else(|| panic!("{OUTSIDE_SCOPE}"))
}

/// Browser-backed session scope. Validates any stored token once on mount.
#[component]
pub fn SessionProvider(#[prop(optional)] config: Option<SessionConfig>, children: Children) -> impl IntoView {
    let config = config.unwrap_or_default();
    let manager = SessionManager::new(
        Rc::new(HttpAuthApi::new(&config)),
        Rc::new(LocalStorageTokenStore::new(config.token_key.clone())),
        Rc::new(RouterNavigator::from_router()),
        config.routes.clone(),
    );
    provide_session(manager.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        manager.initialize().await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = manager;
    }

    children()
}
