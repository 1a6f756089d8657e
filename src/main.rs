//! VRM Session Search - Main Entry Point
//!
//! Client-only Dioxus web application. The search backend is an external
//! service reached over HTTP; nothing is served from this binary.

use vrm_session_search::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] VRM Session Search - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - used for dx serve tooling only
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    dioxus::launch(App);
}
