//! Sign-up page: account registration.

use leptos::prelude::*;

use crate::components::session_provider::use_session;

/// Text input bound to `value`.
#[component]
fn Field(value: RwSignal<String>, kind: &'static str, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            class="auth-input"
            type=kind
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = use_session();
    let sign_in_route = session.routes().sign_in.clone();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let session = session.clone();
        let fields = (username.get(), email.get(), password.get(), confirm_password.get(), name.get());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (username, email, password, confirm_password, name) = fields;
            session.register(&username, &email, &password, &confirm_password, &name).await;
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, fields);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <Field value=username kind="text" placeholder="Username"/>
                    <Field value=name kind="text" placeholder="Full name"/>
                    <Field value=email kind="email" placeholder="you@example.com"/>
                    <Field value=password kind="password" placeholder="Password"/>
                    <Field value=confirm_password kind="password" placeholder="Confirm password"/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=sign_in_route>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
