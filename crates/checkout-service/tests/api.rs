//! HTTP-level tests for the checkout service router.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use checkout_service::{router, AppState, MetricsConfig, PROBLEM_INVALID_REQUEST};

static STATE: Lazy<AppState> = Lazy::new(AppState::build);

fn server() -> TestServer {
    let app = router(STATE.clone(), &MetricsConfig::default());
    TestServer::new(app).expect("test server")
}

fn route_codes(body: &Value) -> Vec<String> {
    body["routes"]
        .as_array()
        .expect("routes array")
        .iter()
        .map(|route| {
            route["darts"]
                .as_array()
                .expect("darts array")
                .iter()
                .map(|dart| dart["code"].as_str().expect("code").to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect()
}

// =============================================================================
// POST /api/v1/checkout
// =============================================================================

#[tokio::test]
async fn checkout_max_score() {
    let response = server()
        .post("/api/v1/checkout")
        .json(&json!({ "target": 170 }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["target"], 170);
    assert_eq!(body["min_darts"], 3);
    assert_eq!(body["outcome"], "found");
    assert_eq!(body["headline"], "1 possibility in 3 darts");
    assert_eq!(body["content_type"], "application/json");
    assert_eq!(route_codes(&body), vec!["T20,T20,DBULL"]);
    assert_eq!(body["routes"][0]["total"], 170);
    assert_eq!(body["routes"][0]["darts"][2]["label"], "Double Bull (50)");
}

#[tokio::test]
async fn checkout_preferred_only_without_match() {
    let response = server()
        .post("/api/v1/checkout")
        .json(&json!({ "target": 170, "show_only_preferred": true }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["min_darts"], 3);
    assert_eq!(body["outcome"], "no_preferred_match");
    assert_eq!(body["routes"], json!([]));
    assert!(body["hint"].is_string());
}

#[tokio::test]
async fn checkout_preferred_only_with_match() {
    let response = server()
        .post("/api/v1/checkout")
        .json(&json!({
            "target": 32,
            "preferred_doubles": ["d16"],
            "show_only_preferred": true
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["min_darts"], 1);
    assert_eq!(route_codes(&body), vec!["D16"]);
    assert_eq!(body["routes"][0]["preferred_finish"], true);
}

#[tokio::test]
async fn checkout_ranks_preferred_first() {
    let response = server()
        .post("/api/v1/checkout")
        .json(&json!({ "target": 41, "preferred_doubles": ["D16"] }))
        .await;

    let body: Value = response.json();
    let codes = route_codes(&body);
    assert_eq!(codes.len(), 18);
    assert_eq!(&codes[..3], &["S9,D16", "T3,D16", "BULL,D8"]);
}

#[tokio::test]
async fn checkout_out_of_range_is_not_an_error() {
    for target in [1, 180, -40] {
        let response = server()
            .post("/api/v1/checkout")
            .json(&json!({ "target": target }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["min_darts"].is_null(), "target {target}");
        assert_eq!(body["outcome"], "impossible");
        assert_eq!(body["headline"], "No checkout possible");
    }
}

#[tokio::test]
async fn checkout_bogey_number_is_impossible() {
    let response = server()
        .post("/api/v1/checkout")
        .json(&json!({ "target": 169 }))
        .await;

    let body: Value = response.json();
    assert!(body["min_darts"].is_null());
    assert_eq!(body["routes"], json!([]));
}

#[tokio::test]
async fn checkout_reports_ignored_preferences() {
    let response = server()
        .post("/api/v1/checkout")
        .json(&json!({ "target": 40, "preferred_doubles": ["D20", "T20"] }))
        .await;

    let body: Value = response.json();
    assert_eq!(body["ignored_preferred"], json!(["T20"]));
    assert_eq!(route_codes(&body), vec!["D20"]);
}

#[tokio::test]
async fn checkout_rejects_empty_codes() {
    let response = server()
        .post("/api/v1/checkout")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("req-empty-code"),
        )
        .json(&json!({ "target": 40, "preferred_doubles": ["D20", ""] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.header("content-type"),
        HeaderValue::from_static("application/problem+json")
    );
    let body: Value = response.json();
    assert_eq!(body["type"], PROBLEM_INVALID_REQUEST);
    assert_eq!(body["instance"], "req-empty-code");
}

#[tokio::test]
async fn checkout_rejects_too_many_codes() {
    let codes: Vec<String> = (1..=22).map(|n| format!("D{n}")).collect();
    let response = server()
        .post("/api/v1/checkout")
        .json(&json!({ "target": 40, "preferred_doubles": codes }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains("at most 21"));
}

#[tokio::test]
async fn checkout_rejects_missing_target() {
    let response = server()
        .post("/api/v1/checkout")
        .json(&json!({ "preferred_doubles": ["D20"] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["type"], PROBLEM_INVALID_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("target"));
}

// =============================================================================
// Request IDs
// =============================================================================

#[tokio::test]
async fn request_id_is_echoed() {
    let response = server()
        .get("/health/live")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("req-echo"),
        )
        .await;

    assert_eq!(
        response.header("x-request-id"),
        HeaderValue::from_static("req-echo")
    );
}

#[tokio::test]
async fn request_id_is_generated_when_missing() {
    let response = server().get("/health/live").await;
    let id = response.header("x-request-id");
    assert_eq!(id.to_str().unwrap().len(), 36);
}

// =============================================================================
// Segments
// =============================================================================

#[tokio::test]
async fn segments_cheat_sheet() {
    let response = server().get("/api/v1/segments").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["triples"].as_array().map(Vec::len), Some(20));
    assert_eq!(body["doubles"][20]["code"], "DBULL");
    assert_eq!(body["singles"][20]["label"], "Bull (25)");
    assert!(body["note"].as_str().unwrap().contains("double"));
}

#[tokio::test]
async fn segment_lookup_is_case_insensitive() {
    let response = server().get("/api/v1/segments/t20").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["code"], "T20");
    assert_eq!(body["value"], 60);
    assert_eq!(body["kind"], "triple");
}

#[tokio::test]
async fn unknown_segment_suggests_alternatives() {
    let response = server().get("/api/v1/segments/D21").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["type"], "/problems/unknown-segment");
    assert!(body["detail"].as_str().unwrap().contains("D20"));
}

// =============================================================================
// Health and metrics
// =============================================================================

#[tokio::test]
async fn health_endpoints() {
    let server = server();

    let live = server.get("/health/live").await;
    live.assert_status_ok();
    let body: Value = live.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "checkout-service");

    let ready = server.get("/health/ready").await;
    ready.assert_status_ok();
    let body: Value = ready.json();
    assert_eq!(body["targets_loaded"], 169);
    assert!(body["checkouts_cached"].as_u64().unwrap() > 169);
}

#[tokio::test]
async fn metrics_endpoint_responds() {
    let response = server().get("/metrics").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn metrics_endpoint_can_be_disabled() {
    let config = MetricsConfig {
        enabled: false,
        ..MetricsConfig::default()
    };
    let server = TestServer::new(router(STATE.clone(), &config)).expect("test server");
    server
        .get("/metrics")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
