//! PoseGuard web client: Leptos UI for uploading sessions, live camera
//! monitoring, analysis review, and player history.
//!
//! SYSTEM CONTEXT
//! ==============
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Every browser API call is gated behind `hydrate`; pure state
//! and formatting helpers stay ungated so they are unit-testable natively.

pub mod app;
pub mod components;
pub mod media;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
