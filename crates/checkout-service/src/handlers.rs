//! Request handlers and router assembly.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use checkout_lib::{segments, CheckoutSummary, DartLine};

use crate::health::{health_live, health_ready};
use crate::metrics::{
    metrics_handler, record_checkout_failed, record_checkout_served, record_routes_returned,
    record_segment_lookup, MetricsConfig,
};
use crate::middleware::{propagate_request_id, track_http_metrics, RequestId};
use crate::problem::{from_lib_error, ProblemDetails};
use crate::request::{CheckoutRequest, Validate};
use crate::response::ServiceResponse;
use crate::state::AppState;

/// Build the service router.
///
/// # Endpoints
///
/// - `POST /api/v1/checkout` - Ranked minimal checkouts for a score
/// - `GET /api/v1/segments` - Score cheat sheet
/// - `GET /api/v1/segments/{code}` - Look up one segment
/// - `GET {metrics.path}` - Prometheus metrics endpoint
/// - `GET /health/live`, `GET /health/ready` - Liveness and readiness probes
pub fn router(state: AppState, metrics: &MetricsConfig) -> Router {
    let mut app = Router::new()
        .route("/api/v1/checkout", post(checkout_handler))
        .route("/api/v1/segments", get(segments_handler))
        .route("/api/v1/segments/{code}", get(segment_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready));

    if metrics.enabled {
        app = app.route(&metrics.path, get(metrics_handler));
    }

    app.route_layer(middleware::from_fn(track_http_metrics))
        .layer(middleware::from_fn(propagate_request_id))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handle `POST /api/v1/checkout`.
async fn checkout_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "rejected checkout payload");
            record_checkout_failed("invalid_json");
            return ProblemDetails::bad_request(rejection.body_text(), request_id.as_str())
                .into_response();
        }
    };

    info!(
        target_score = request.target,
        preferred = ?request.preferred_doubles,
        only_preferred = request.show_only_preferred,
        "handling checkout request"
    );

    if let Err(problem) = request.validate(request_id.as_str()) {
        record_checkout_failed("validation_error");
        return (*problem).into_response();
    }

    let config = request.to_config();
    let result = state.book().lookup(request.target, &config);
    let summary = CheckoutSummary::from_result(request.target, &result, &config);

    record_checkout_served(summary.outcome);
    record_routes_returned(summary.routes.len(), summary.min_darts);
    info!(
        min_darts = ?summary.min_darts,
        routes = summary.routes.len(),
        outcome = %summary.outcome,
        "checkout computed"
    );

    ServiceResponse::new(summary).into_response()
}

/// Handle `GET /api/v1/segments`.
async fn segments_handler(State(state): State<AppState>) -> Response {
    ServiceResponse::new(state.segments().clone()).into_response()
}

/// Handle `GET /api/v1/segments/{code}`.
async fn segment_handler(
    Extension(request_id): Extension<RequestId>,
    Path(code): Path<String>,
) -> Response {
    match segments().resolve(&code.trim().to_ascii_uppercase()) {
        Ok(segment) => {
            record_segment_lookup(true);
            ServiceResponse::new(DartLine::from(segment)).into_response()
        }
        Err(error) => {
            record_segment_lookup(false);
            from_lib_error(&error, request_id.as_str()).into_response()
        }
    }
}
