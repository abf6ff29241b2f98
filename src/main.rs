//! Chronologic
//!
//! Front-end for connecting two services and describing, in plain language,
//! how they should work together. The backend turns the pairing into an
//! automation; this app is the canvas in front of it.
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! The Connection Builder state (slot assignment, submission log, in-flight
//! guard) lives in plain Rust types under `state`, wrapped in Leptos signals
//! only at the edge, and talks to the backend over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
