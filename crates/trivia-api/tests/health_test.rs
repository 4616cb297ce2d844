//! Integration tests for the health endpoint.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_returns_200_with_status_ok() {
    let app = common::build_test_app(Vec::new());

    let response = common::get_json(&app.router, "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["status"], "ok");
    assert!(response.json["version"].is_string());
    assert!(response.cookie.is_none());
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = common::build_test_app(Vec::new());

    let response = common::send_empty(&app.router, "GET", "/api/v1/nonexistent").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
