//! Reusable UI components.

pub mod session_provider;
