//! HTTP API Client
//!
//! Functions for communicating with the Chronologic backend.

use gloo_net::http::Request;

use crate::state::workflow::GraphRequest;

/// Default backend base URL (FastAPI dev server)
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const API_BASE_KEY: &str = "chronologic_api_url";

/// Errors from backend calls. Rejections and transport failures are kept
/// apart for diagnostics; callers fold both into the same user-visible
/// failure state.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("backend rejected the request (HTTP {status})")]
    Rejected { status: u16 },
    #[error("backend unreachable: {0}")]
    Unreachable(String),
}

/// Get the backend base URL from local storage or use the default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Persist the backend base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(API_BASE_KEY, url);
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Submit a connection to the automation builder.
///
/// Any 2xx response counts as accepted; the body is not inspected.
pub async fn submit_graph(payload: &GraphRequest) -> Result<(), ApiError> {
    let response = Request::post(&format!("{}/graph", get_api_base()))
        .json(payload)
        .map_err(|e| ApiError::Unreachable(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Unreachable(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Rejected {
            status: response.status(),
        });
    }

    Ok(())
}

/// Check backend health
pub async fn check_health() -> Result<HealthResponse, ApiError> {
    let response = Request::get(&format!("{}/api/health", get_api_base()))
        .send()
        .await
        .map_err(|e| ApiError::Unreachable(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Rejected {
            status: response.status(),
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Unreachable(format!("malformed health response: {e}")))
}
