//! Bridge from the identity provider SDK's global callback into the flows.
//!
//! The SDK looks the callback up by name on `window` and calls it with an
//! object whose `credential` field holds the token. Only that field is read.
//!
//! The name is wired on the host page, not on the rendered button: its
//! `<div id="g_id_onload">` carries `data-client_id` and
//! `data-callback="handleGoogleLogin"`. A `g_id_signin` element only draws the
//! button and ignores `data-callback`.

#[cfg(test)]
#[path = "provider_callback_test.rs"]
mod provider_callback_test;

use crate::auth::AuthHandlers;
#[cfg(feature = "csr")]
use crate::auth::CredentialResponse;

pub const CALLBACK_NAME: &str = "handleGoogleLogin";

/// Register `window.handleGoogleLogin` to run `on_credential` on `handlers`.
pub fn install_credential_callback<H>(handlers: H)
where
    H: AuthHandlers + Clone + 'static,
{
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsValue;
        use wasm_bindgen::prelude::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
            let credential = js_sys::Reflect::get(&response, &JsValue::from_str("credential"))
                .ok()
                .and_then(|v| v.as_string());
            let handlers = handlers.clone();
            leptos::task::spawn_local(async move {
                let _ = handlers.on_credential(CredentialResponse { credential }).await;
            });
        });
        if js_sys::Reflect::set(&window, &JsValue::from_str(CALLBACK_NAME), callback.as_ref()).is_err() {
            log::error!("failed to register window.{CALLBACK_NAME}");
        }
        // Lives as long as the page.
        callback.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = handlers;
    }
}
