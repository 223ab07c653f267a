//! Integration tests for the root banner, health check and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, healthy_app};
use tower::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok_with_version() {
    let response = get(healthy_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn banner_lists_providers_and_endpoints() {
    let response = get(healthy_app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "online");
    assert_eq!(json["apis"], serde_json::json!(["AviationStack", "FlightAPI.io"]));
    assert_eq!(json["endpoints"].as_array().unwrap().len(), 5);
    assert_eq!(json["endpoints"][0], "/api/flights/live");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(healthy_app(), "/api/v1/flights").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(healthy_app(), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/mcp/execute")
        .header("origin", "https://agent.example.com")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = healthy_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
