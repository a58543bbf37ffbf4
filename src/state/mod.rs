//! Client-side state that outlives a single page.

pub mod session;
