//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages collect form input and hand it to the session manager; they never
//! touch tokens or the auth API directly.

pub mod home;
pub mod sign_in;
pub mod sign_up;
