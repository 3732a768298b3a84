//! Route changes triggered by session transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation is a side effect of login, registration and logout rather than
//! a return value, so the manager owns a `Navigator` instead of handing
//! routes back to its callers.

use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

pub trait Navigator {
    fn navigate(&self, route: &str);
}

/// Client-side navigation through the enclosing `Router`.
pub struct RouterNavigator {
    navigate: Box<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Capture the router's navigate function. Must be called inside a `Router`.
    pub fn from_router() -> Self {
        Self { navigate: Box::new(use_navigate()) }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, route: &str) {
        (self.navigate)(route, NavigateOptions::default());
    }
}
