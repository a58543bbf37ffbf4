//! Page modules for the standalone auth screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signals and in-flight guard and delegates the
//! request/response handling to `auth::AuthFlows`.

pub mod login;
pub mod signup;
