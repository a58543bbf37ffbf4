//! Browser window side effects: acknowledgment dialog and navigation.
//!
//! TRADE-OFFS
//! ==========
//! Both actions are fire-and-forget. Native builds only log what would have
//! happened so flow code stays identical across targets.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

/// What a completed flow asks of the hosting page.
pub trait BrowserHost {
    /// Show a blocking confirmation to the user.
    fn acknowledge(&self, message: &str);

    /// Navigate away to `location`.
    fn redirect(&self, location: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowHost;

impl BrowserHost for WindowHost {
    fn acknowledge(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::info!("acknowledge: {message}");
        }
    }

    fn redirect(&self, location: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(location);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::info!("redirect: {location}");
        }
    }
}
