//! HTTP Boundary Tests
//!
//! Drives the router in-process and checks the status code and body for
//! each outcome of the validation routes.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use regen_score::http_server::{HttpServer, HttpServerConfig};
use regen_score::validation::Validator;
use serde_json::{json, Value};
use tower::ServiceExt;

fn router(validator: Validator) -> Router {
    HttpServer::with_config(HttpServerConfig::default(), validator).router()
}

async fn post(router: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = router(Validator::default()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_valid_metrics_accepted() {
    let body = json!({ "co2Reduction": 10, "waterSaving": 5, "energyEfficiency": 2 }).to_string();
    let (status, json) = post(router(Validator::default()), "/validate/metrics", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["co2Reduction"], 10.0);
    assert!(json["data"].get("wasteReduction").is_none());
    assert!(json["request_id"].is_string());
}

#[tokio::test]
async fn test_invalid_score_is_unprocessable() {
    let body = json!({
        "score": 80,
        "components": [{ "key": "co2", "label": "CO2", "weight": 1.5, "value": 90 }],
        "updatedAt": "2024-01-01T00:00:00Z"
    })
    .to_string();
    let (status, json) = post(router(Validator::default()), "/validate/score", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "REGEN_VALIDATION_FAILED");
    assert_eq!(json["model"], "regen_score_breakdown");
    assert_eq!(json["violations"][0]["field"], "components[0].weight");
    assert_eq!(json["violations"][0]["code"], "REGEN_OUT_OF_RANGE");
    assert_eq!(json["violations"][0]["value"], 1.5);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (status, json) = post(router(Validator::default()), "/validate/score", "{\"score\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "REGEN_VALIDATION_FAILED");
    assert_eq!(json["violations"][0]["code"], "REGEN_MALFORMED_INPUT");
    assert_eq!(json["violations"][0]["field"], "$root");
}

#[tokio::test]
async fn test_strict_server_rejects_unnormalized_weights() {
    let body = json!({
        "score": 80,
        "components": [{ "key": "co2", "label": "CO2", "weight": 0.5, "value": 90 }],
        "updatedAt": "2024-01-01T00:00:00Z"
    })
    .to_string();

    let (status, _) = post(router(Validator::default()), "/validate/score", body.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = post(router(Validator::strict()), "/validate/score", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["violations"][0]["field"], "components");
    assert_eq!(json["violations"][0]["code"], "REGEN_CONSTRAINT_VIOLATED");
}

#[tokio::test]
async fn test_get_on_validate_route_not_allowed() {
    let request = Request::builder().uri("/validate/metrics").body(Body::empty()).unwrap();
    let response = router(Validator::default()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
