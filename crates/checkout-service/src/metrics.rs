//! Prometheus metrics for the checkout service.
//!
//! This module provides:
//! - [`MetricsConfig`]: Configuration for the metrics system
//! - [`init_metrics`]: Initialize the Prometheus metrics recorder
//! - [`metrics_handler`]: Axum handler for the metrics endpoint
//! - Business metric helpers for checkout requests
//!
//! # Example
//!
//! ```no_run
//! use checkout_service::metrics::{init_metrics, metrics_handler, MetricsConfig};
//! use axum::{routing::get, Router};
//!
//! init_metrics(&MetricsConfig::default()).expect("failed to initialize metrics");
//! let app: Router = Router::new().route("/metrics", get(metrics_handler));
//! ```

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use checkout_lib::CheckoutOutcome;

static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Path for the metrics endpoint (e.g., "/metrics").
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl MetricsConfig {
    /// Create configuration from environment variables.
    ///
    /// - `METRICS_ENABLED`: "true" or "false" (default: true)
    /// - `METRICS_PATH`: Path for metrics endpoint (default: "/metrics")
    pub fn from_env() -> Self {
        let enabled = std::env::var("METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);
        let path = std::env::var("METRICS_PATH").unwrap_or_else(|_| "/metrics".to_string());

        Self { enabled, path }
    }
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone, Error)]
pub enum MetricsError {
    #[error("metrics are disabled")]
    Disabled,
    #[error("metrics recorder already initialized")]
    AlreadyInitialized,
    #[error("failed to install metrics recorder: {0}")]
    InstallFailed(String),
}

/// Initialize the Prometheus metrics recorder.
///
/// # Errors
///
/// Returns an error if metrics are disabled, the recorder has already been
/// installed, or the Prometheus builder fails to install.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }
    if PROMETHEUS_HANDLE.get().is_some() {
        return Err(MetricsError::AlreadyInitialized);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)
}

/// Axum handler for the metrics endpoint, in Prometheus exposition format.
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

// =============================================================================
// Business Metrics Helpers
// =============================================================================

/// Increment `checkout_requests_total` for a served checkout.
pub fn record_checkout_served(outcome: CheckoutOutcome) {
    metrics::counter!(
        "checkout_requests_total",
        "outcome" => outcome.to_string()
    )
    .increment(1);
}

/// Increment `checkout_requests_failed_total`.
///
/// `reason` is e.g. "validation_error" or "invalid_json".
pub fn record_checkout_failed(reason: &str) {
    metrics::counter!(
        "checkout_requests_failed_total",
        "reason" => reason.to_string()
    )
    .increment(1);
}

/// Record the number of listed routes in the `checkout_routes_returned` histogram.
pub fn record_routes_returned(routes: usize, min_darts: Option<u8>) {
    let darts = min_darts.map_or_else(|| "none".to_string(), |d| d.to_string());
    metrics::histogram!("checkout_routes_returned", "darts" => darts).record(routes as f64);
}

/// Increment `checkout_segment_lookups_total`.
pub fn record_segment_lookup(found: bool) {
    let result = if found { "found" } else { "unknown" };
    metrics::counter!("checkout_segment_lookups_total", "result" => result).increment(1);
}
