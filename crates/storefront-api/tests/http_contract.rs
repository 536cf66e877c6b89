//! HTTP contract tests that need no live database.
//!
//! The router is built over a lazy pool pointed at an unreachable address:
//! validation rejections never touch the pool, and the health endpoint is
//! specified to report (not raise) connectivity failures.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use storefront_api::{AppState, build_router};
use storefront_common::config::DatabaseConfig;
use storefront_db::Database;
use tower::ServiceExt; // for oneshot

fn unreachable_app() -> Router {
    let config = DatabaseConfig {
        user: "admin".into(),
        password: "password".into(),
        host: "127.0.0.1".into(),
        port: 1, // nothing listens here
        name: "products".into(),
        min_connections: 1,
        max_connections: 10,
    };
    let db = Database::connect_lazy(&config).expect("lazy pool should build");
    build_router(AppState { db })
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_disconnected_database_with_200() {
    let app = unreachable_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn non_integer_id_is_unprocessable() {
    let app = unreachable_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn delete_with_non_integer_id_is_unprocessable() {
    let app = unreachable_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/products/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unparsable_price_is_unprocessable() {
    let app = unreachable_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/products")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"name": "X", "price": "not-a-number"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn empty_name_is_unprocessable() {
    let app = unreachable_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/products")
                .header("content-type", "application/json")
                .body(Body::from(json!({"name": "", "price": "1.00"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Validation failed: Name cannot be empty");
}

#[tokio::test]
async fn malformed_json_body_is_unprocessable() {
    let app = unreachable_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/products")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn cors_preflight_mirrors_origin_and_allows_credentials() {
    let app = unreachable_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/products")
                .header("origin", "http://example.com")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://example.com"
    );
    assert_eq!(headers.get("access-control-allow-credentials").unwrap(), "true");
    let methods = headers
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("DELETE"));
}
