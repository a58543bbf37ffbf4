//! # signup-client
//!
//! Leptos + WASM signup and sign-in pages for the shop frontend.
//!
//! The request/response behavior lives in `auth` behind small capability
//! traits (transport, session store, error surface, window host) so it runs
//! natively under test. `pages` renders the forms and wires them, and the
//! identity provider's global callback, to those flows.
//!
//! Build with `--features csr` for the browser; the `mount_*` entry points
//! are exported to JavaScript from that build.

pub mod auth;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
fn init_browser_logging() {
    console_error_panic_hook::set_once();
    // A second mount on the same page finds the logger already set.
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Mount the signup page into `<body>` and register the provider callback.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_signup_page() {
    init_browser_logging();
    leptos::mount::mount_to_body(pages::signup::SignupPage);
}

/// Mount the login page into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_login_page() {
    init_browser_logging();
    leptos::mount::mount_to_body(pages::login::LoginPage);
}
