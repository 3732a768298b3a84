//! Root application component with routing and the session scope.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::session_provider::SessionProvider;
use crate::config::{DEFAULT_LANDING_ROUTE, DEFAULT_SIGN_IN_ROUTE, DEFAULT_SIGN_UP_ROUTE, SessionConfig};
use crate::pages::{home::HomePage, sign_in::SignInPage, sign_up::SignUpPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn load_config() -> SessionConfig {
    SessionConfig::from_build_env().unwrap_or_else(|err| {
        log::error!("invalid session config, using defaults: {err}");
        SessionConfig::default()
    })
}

/// Router segment for a session route (`"/home"` -> `"home"`).
fn segment(route: &'static str) -> &'static str {
    route.trim_start_matches('/')
}

/// Root application component.
///
/// The session scope wraps every route so each page can call `use_session`.
/// Paths come from the same constants as `SessionRoutes::default`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = load_config();

    view! {
        <Title text="SoftInvite"/>

        <Router>
            <SessionProvider config=config>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DEFAULT_LANDING_ROUTE/> }/>
                    <Route path=StaticSegment(segment(DEFAULT_LANDING_ROUTE)) view=HomePage/>
                    <Route path=StaticSegment(segment(DEFAULT_SIGN_IN_ROUTE)) view=SignInPage/>
                    <Route path=StaticSegment(segment(DEFAULT_SIGN_UP_ROUTE)) view=SignUpPage/>
                </Routes>
            </SessionProvider>
        </Router>
    }
}
