//! Activities Board
//!
//! Browser front-end for the activity signup API, built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with availability and participants
//! - Signup form
//! - Participant removal
//! - Transient status messages
//!
//! # Architecture
//!
//! User actions become [`state::intent::Intent`]s handled by a single-threaded
//! [`dispatch::Dispatcher`]. Its outcomes land in reactive signals that the
//! components mounted into the page's anchors draw from.

use leptos::logging::error;

mod api;
mod app;
mod components;
mod dispatch;
mod dom;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    if let Err(e) = app::start() {
        error!("Failed to start activities UI: {}", e);
    }
}
