//! HTTP microservice for darts checkout suggestions.
//!
//! - [`AppState`]: Pre-built checkout book for zero-latency lookups
//! - [`health`]: Liveness and readiness probes
//! - [`ProblemDetails`]: RFC 9457 Problem Details for consistent error responses
//! - [`ServiceResponse`]: Wrapper for successful responses with content type
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request ID propagation and HTTP metrics
//!
//! # Architecture
//!
//! Handlers stay thin; all checkout logic lives in `checkout-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse request JSON                                       │
//! │  - Validate parameters                                      │
//! │  - Look up the cached tier and rank it                      │
//! │  - Format response                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![deny(warnings)]

mod handlers;
pub mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

pub use handlers::router;
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{init_metrics, metrics_handler, MetricsConfig, MetricsError};
pub use middleware::{extract_or_generate_request_id, RequestId};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INVALID_REQUEST, PROBLEM_UNKNOWN_SEGMENT,
};
pub use request::{CheckoutRequest, Validate};
pub use response::ServiceResponse;
pub use state::AppState;
