//! Login page reached after signup; accepts a username or an email.

use leptos::prelude::*;

use crate::auth::AuthFlows;
use crate::state::session::{LocalStorageSession, SessionStore};
use crate::util::error_region::{ErrorMessage, ErrorRegion};
use crate::util::validate::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    // Prefill with whoever signed up or in last on this browser.
    let remembered = LocalStorageSession.load().map(|record| record.username).unwrap_or_default();
    let username = RwSignal::new(remembered);
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let errors = ErrorRegion::new();
    let flows = AuthFlows::browser(errors);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm { username: username.get_untracked(), password: password.get_untracked() };
        busy.set(true);
        let flows = flows.clone();
        leptos::task::spawn_local(async move {
            let _ = flows.login(&form).await;
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Log In"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username or email"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log In"
                    </button>
                </form>
                <ErrorMessage region=errors/>
            </div>
        </div>
    }
}
