//! ==============================================================================
//! lib.rs - Login Welcome Screen
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm app that shows the login welcome screen.
//!     renders a fixed greeting for the placeholder user.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - no network, no state, no routing
//!
//! ==============================================================================

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod components;

pub use components::{greeting, WelcomeView, DEFAULT_USER};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::logging::log!("mounting welcome view for {}", DEFAULT_USER);
    mount_to_body(WelcomeView);
}
