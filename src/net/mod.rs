//! Networking modules for the remote authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the three HTTP calls the session manager depends on and
//! `types` defines their wire schema.

pub mod api;
pub mod types;
