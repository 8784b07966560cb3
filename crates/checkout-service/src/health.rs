//! Health check handlers for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always "ok"; the book is built before the listener binds.
    pub status: String,

    pub service: String,

    pub version: String,

    /// Number of scores with a cached tier entry (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets_loaded: Option<usize>,

    /// Total cached minimal routes (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkouts_cached: Option<usize>,
}

impl HealthStatus {
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            targets_loaded: None,
            checkouts_cached: None,
        }
    }

    pub fn ready(service: &str, version: &str, targets: usize, checkouts: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            targets_loaded: Some(targets),
            checkouts_cached: Some(checkouts),
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"checkout-service","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// The checkout book is built before the server starts listening, so a
/// reachable service is always ready; the body reports what it holds.
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"checkout-service","version":"0.1.0","targets_loaded":169,"checkouts_cached":...}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let book = state.book();
    let status = HealthStatus::ready(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        book.len(),
        book.checkout_count(),
    );
    (StatusCode::OK, Json(status))
}
