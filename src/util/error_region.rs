//! The page's single error message region.
//!
//! Flows never look the region up; they receive an `ErrorSurface` and write
//! through it. `ErrorRegion` is the reactive implementation the pages render.

#[cfg(test)]
#[path = "error_region_test.rs"]
mod error_region_test;

use leptos::prelude::*;

/// Sink for user-facing error text. Each call overwrites the previous one.
pub trait ErrorSurface {
    /// Replace the message and make the region visible.
    fn show_error(&self, message: &str);

    /// Empty the message.
    fn clear(&self);
}

#[derive(Clone, Copy, Debug)]
pub struct ErrorRegion {
    pub message: RwSignal<String>,
    pub visible: RwSignal<bool>,
}

impl ErrorRegion {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(String::new()),
            visible: RwSignal::new(false),
        }
    }
}

impl Default for ErrorRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorSurface for ErrorRegion {
    fn show_error(&self, message: &str) {
        self.message.set(message.to_owned());
        self.visible.set(true);
    }

    fn clear(&self) {
        self.message.set(String::new());
    }
}

/// Error paragraph bound to an `ErrorRegion`.
#[component]
pub fn ErrorMessage(region: ErrorRegion) -> impl IntoView {
    view! {
        <p
            class="error-msg"
            id="errorMsg"
            style:display=move || if region.visible.get() { "block" } else { "none" }
        >
            {move || region.message.get()}
        </p>
    }
}
