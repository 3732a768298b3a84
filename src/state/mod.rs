//! Client-side session state.
//!
//! DESIGN
//! ======
//! `session` is the plain value shared with components; `session_manager`
//! owns the only write handle to it and performs the remote calls.

pub mod session;
pub mod session_manager;
