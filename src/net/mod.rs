//! Networking modules for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls behind the `AuthTransport` seam and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
