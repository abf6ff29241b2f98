//! HTTP API
//!
//! Client for the Chronologic backend.

pub mod client;

pub use client::{check_health, get_api_base, set_api_base, submit_graph};
