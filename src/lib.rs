//! # softinvite-session
//!
//! Leptos + WASM front-end session handling for the SoftInvite admin API.
//!
//! The crate tracks whether a user session exists, exposes login, register
//! and logout actions that call the remote API, and persists the bearer token
//! in `localStorage`. [`state::session_manager::SessionManager`] is the core;
//! [`components::session_provider`] wires it into the component tree.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
