//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle through the router.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use math_serv::{
    api::create_router,
    cache::{ManualClock, ResultCache},
    operations::OperationRegistry,
    response::{ErrorDetail, ResponseBuilder},
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

const FORM: &str = "application/x-www-form-urlencoded";
const JSON: &str = "application/json";
const TTL: Duration = Duration::from_secs(60);

// == Helper Functions ==

fn create_test_app() -> (Router, ManualClock) {
    create_test_app_with_detail(ErrorDetail::Verbose)
}

fn create_test_app_with_detail(detail: ErrorDetail) -> (Router, ManualClock) {
    let clock = ManualClock::new(0);
    let cache = ResultCache::with_clock(TTL, Arc::new(clock.clone()));
    let state = AppState::new(cache, ResponseBuilder::new(detail));
    (create_router(state), clock)
}

fn form_request(op: &str, x: f64, y: f64) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/{op}?x={x:?}&y={y:?}"))
        .header("content-type", FORM)
        .body(Body::empty())
        .unwrap()
}

fn json_request(op: &str, x: f64, y: f64) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/{op}"))
        .header("content-type", JSON)
        .body(Body::from(serde_json::json!({ "x": x, "y": y }).to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Makes a well-formed request and checks every field of the success body.
async fn valid_request(app: &Router, request: Request<Body>, op: &str, x: f64, y: f64, cached: bool) {
    let expected = OperationRegistry::standard().evaluate(op, x, y).unwrap();
    let (status, json) = send(app, request).await;

    assert_eq!(status, StatusCode::OK, "{op}: {json}");
    assert_eq!(json["action"], op);
    assert_eq!(json["x"].as_f64().unwrap(), x);
    assert_eq!(json["y"].as_f64().unwrap(), y);
    assert_eq!(json["answer"].as_f64().unwrap(), expected, "{op} answer");
    assert_eq!(json["cached"], cached, "{op} cached flag");
}

/// Picks operands for which `op` gives a finite answer.
fn well_behaved(op: &str, x: f64, y: f64, fallback: (f64, f64)) -> (f64, f64) {
    let answer = OperationRegistry::standard().evaluate(op, x, y).unwrap();
    if answer.is_finite() {
        (x, y)
    } else {
        fallback
    }
}

// == Form Encoded Requests ==

#[tokio::test]
async fn test_form_requests_for_every_operation() {
    let (app, clock) = create_test_app();

    for op in OperationRegistry::standard().names() {
        let (x, y) = well_behaved(op, 34.854, -0.935, (34.854, 1.20034));

        valid_request(&app, form_request(op, x, y), op, x, y, false).await;
        valid_request(&app, form_request(op, x, y), op, x, y, true).await;

        clock.advance(TTL);
        valid_request(&app, form_request(op, x, y), op, x, y, false).await;
    }
}

#[tokio::test]
async fn test_form_request_body() {
    let (app, _) = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/divide")
        .header("content-type", FORM)
        .body(Body::from("x=4.2&y=12.6678"))
        .unwrap();
    let (status, json) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!((json["answer"].as_f64().unwrap() - 0.331_549).abs() < 1e-6);
    assert_eq!(json["cached"], false);
}

// == JSON Requests ==

#[tokio::test]
async fn test_json_requests_for_every_operation() {
    let (app, clock) = create_test_app();

    for op in OperationRegistry::standard().names() {
        let (x, y) = well_behaved(op, -44.444, 1.000001, (26.8834, 7.00849));

        valid_request(&app, json_request(op, x, y), op, x, y, false).await;
        valid_request(&app, json_request(op, x, y), op, x, y, true).await;

        clock.advance(TTL);
        valid_request(&app, json_request(op, x, y), op, x, y, false).await;
    }
}

#[tokio::test]
async fn test_json_multiply() {
    let (app, _) = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/multiply")
        .header("content-type", JSON)
        .body(Body::from(r#"{"x": 7.0, "y": 8.0}"#))
        .unwrap();
    let (status, json) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["answer"], 56.0);
}

#[tokio::test]
async fn test_form_and_json_share_cache_entry() {
    let (app, _) = create_test_app();

    valid_request(&app, form_request("add", 1.5, 2.5), "add", 1.5, 2.5, false).await;
    valid_request(&app, json_request("add", 1.5, 2.5), "add", 1.5, 2.5, true).await;
}

// == Sliding Expiry ==

#[tokio::test]
async fn test_each_request_extends_expiry() {
    let (app, clock) = create_test_app();

    valid_request(&app, form_request("pow", 2.0, 8.0), "pow", 2.0, 8.0, false).await;
    clock.advance(Duration::from_secs(45));
    valid_request(&app, form_request("pow", 2.0, 8.0), "pow", 2.0, 8.0, true).await;
    clock.advance(Duration::from_secs(45));
    valid_request(&app, form_request("pow", 2.0, 8.0), "pow", 2.0, 8.0, true).await;
    clock.advance(TTL);
    valid_request(&app, form_request("pow", 2.0, 8.0), "pow", 2.0, 8.0, false).await;
}

// == Numeric Edge Cases ==

#[tokio::test]
async fn test_divide_by_zero_returns_infinity() {
    let (app, _) = create_test_app();

    let (status, json) = send(&app, form_request("divide", 1.0, 0.0)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["answer"], "Infinity");

    let (status, json) = send(&app, json_request("log", -5.0, 10.0)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["answer"], "NaN");
}

// == Error Paths ==

#[tokio::test]
async fn test_missing_content_type() {
    let (app, _) = create_test_app();

    for op in ["add", "divide", "fourierTransform"] {
        let request = Request::builder()
            .method("POST")
            .uri(format!("/{op}?x=1&y=2"))
            .body(Body::from(r#"{"x": 1, "y": 2}"#))
            .unwrap();
        let (status, json) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], 400);
        assert!(!json["error"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_unsupported_content_type() {
    let (app, _) = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/add")
        .header("content-type", "application/xml")
        .body(Body::from("<MathRequest><X>1</X><Y>2</Y></MathRequest>"))
        .unwrap();
    let (status, json) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("application/xml"));
}

#[tokio::test]
async fn test_unsupported_operation() {
    let (app, _) = create_test_app();

    let (status, json) = send(&app, form_request("fourierTransform", 1.0, -1.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().contains("fourierTransform"));

    let (status, _) = send(&app, json_request("gradientDescent", -44.444, 1.000001)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_body() {
    let (app, _) = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/add")
        .header("content-type", JSON)
        .body(Body::from("{invalid json}"))
        .unwrap();
    let (status, json) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("json"));
}

#[tokio::test]
async fn test_invalid_form_operand() {
    let (app, _) = create_test_app();

    let request = Request::builder()
        .uri("/add?x=one&y=2")
        .header("content-type", FORM)
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("'x'"));
}

#[tokio::test]
async fn test_generic_error_detail_hides_internals() {
    let (app, _) = create_test_app_with_detail(ErrorDetail::Generic);

    let (status, json) = send(&app, form_request("fourierTransform", 1.0, -1.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "bad request");
}

// == Stats and Health ==

#[tokio::test]
async fn test_stats_endpoint() {
    let (app, _) = create_test_app();

    send(&app, form_request("add", 1.0, 2.0)).await;
    send(&app, form_request("add", 1.0, 2.0)).await;

    let request = Request::builder()
        .uri("/stats")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["total_entries"], 1);
    assert_eq!(json["hit_rate"], 0.5);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = create_test_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_shared_cache_state() {
    let clock = ManualClock::new(0);
    let cache = Arc::new(ResultCache::with_clock(TTL, Arc::new(clock.clone())));
    let app = create_router(AppState::with_shared_cache(
        cache.clone(),
        ResponseBuilder::default(),
    ));

    send(&app, json_request("subtract", 9.5334, 2.1)).await;
    assert_eq!(cache.len().await, 1);

    clock.advance(TTL);
    assert_eq!(cache.cleanup_expired().await, 1);
    assert!(cache.is_empty().await);
}
