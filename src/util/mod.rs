//! Utility helpers shared across session modules and pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, routing) behind small
//! traits so the session manager stays testable off the browser.

pub mod auth;
pub mod navigation;
pub mod token_store;
