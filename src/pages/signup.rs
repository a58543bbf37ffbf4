//! Signup page: account form plus "Sign in with Google".

use leptos::prelude::*;

use crate::auth::{AuthFlows, AuthHandlers};
use crate::util::error_region::{ErrorMessage, ErrorRegion};
use crate::util::provider_callback::install_credential_callback;
use crate::util::validate::SignupForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let errors = ErrorRegion::new();
    let flows = AuthFlows::browser(errors);
    install_credential_callback(flows.clone());
    let login_href = flows.config().login_location.clone();

    // Enter in any field submits the form; a submit while one is in flight is dropped.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignupForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        busy.set(true);
        let flows = flows.clone();
        leptos::task::spawn_local(async move {
            let _ = flows.on_submit(form).await;
            busy.set(false);
        });
    };

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h1>"Create Account"</h1>
                <form class="signup-form" on:submit=on_submit>
                    <input
                        class="signup-input"
                        id="username"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="signup-input"
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="signup-input"
                        id="password"
                        type="password"
                        placeholder="Password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="signup-input"
                        id="confirmPassword"
                        type="password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <button class="signup-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <ErrorMessage region=errors/>
                <div class="signup-divider"></div>
                // Button only; the SDK reads `data-callback` from the host page's `g_id_onload`.
                <div class="g_id_signin" data-type="standard"></div>
                <p class="signup-footer">
                    "Already have an account? "
                    <a href=login_href>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
