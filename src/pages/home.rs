//! Landing page for signed-in users.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::session_provider::use_session;
use crate::util::auth::install_unauth_redirect;

/// Shows the current profile and a logout button.
/// Redirects to sign-in if the page is opened without a session.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    install_unauth_redirect(
        session.state().into(),
        session.routes().sign_in.clone(),
        move |route| navigate(route, NavigateOptions::default()),
    );

    let state = session.state();
    let on_logout = move |_| session.logout();

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Welcome"</h1>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            {move || {
                let state = state.get();
                if state.is_pending_validation() {
                    return view! { <p>"Loading profile..."</p> }.into_any();
                }
                match state.user {
                    Some(user) => view! {
                        <dl class="home-page__profile">
                            <dt>"Name"</dt>
                            <dd>{user.name}</dd>
                            <dt>"Username"</dt>
                            <dd>{user.username}</dd>
                            <dt>"Email"</dt>
                            <dd>{user.email}</dd>
                        </dl>
                    }
                        .into_any(),
                    None => ().into_any(),
                }
            }}
        </div>
    }
}
