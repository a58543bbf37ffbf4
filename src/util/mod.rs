//! Utility helpers shared across the auth pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (window, error region) and pure
//! input checks from flow logic so each can be tested on its own.

pub mod error_region;
pub mod host;
pub mod provider_callback;
pub mod validate;
