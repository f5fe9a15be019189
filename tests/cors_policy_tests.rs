//! Tests for the cross-origin access policy.
//!
//! tower-http implements the policy by withholding the allow headers for
//! origins outside the allow list; the request itself still succeeds
//! server-side, and the browser is the one that blocks the response.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use tree_messages::db::repositories::LocalRepository;
use tree_messages::db::repository::MessageRepository;
use tree_messages::http::{create_router, AppState};

fn test_app() -> Router {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn MessageRepository>;
    create_router(AppState::new(repo))
}

fn preflight(origin: &str, method: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/message")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_preflight_from_netlify_origin_is_permitted() {
    let app = test_app();
    let origin = "https://christmas-treeee.netlify.app";

    let response = app.oneshot(preflight(origin, "POST")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        origin
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_MAX_AGE).unwrap(),
        "3600"
    );
    // Mirror-request mode echoes the requested method back
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "POST"
    );
}

#[tokio::test]
async fn test_preflight_permits_any_method() {
    for method in ["GET", "POST", "PUT", "DELETE", "PATCH"] {
        let app = test_app();
        let response = app
            .oneshot(preflight("https://christmas-treeee.netlify.app", method))
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_METHODS)
                .unwrap(),
            method
        );
    }
}

#[tokio::test]
async fn test_preflight_mirrors_requested_headers() {
    let app = test_app();
    let mut request = preflight("http://localhost:3000", "POST");
    request.headers_mut().insert(
        header::ACCESS_CONTROL_REQUEST_HEADERS,
        "x-custom-header".parse().unwrap(),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .unwrap(),
        "x-custom-header"
    );
}

#[tokio::test]
async fn test_preflight_from_unknown_origin_gets_no_allow_headers() {
    let app = test_app();

    let response = app
        .oneshot(preflight("https://evil.example.com", "POST"))
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_loopback_dev_origins_are_permitted() {
    for origin in [
        "http://localhost:5173",
        "http://127.0.0.1:3000",
        "https://localhost:8443",
    ] {
        let app = test_app();
        let response = app.oneshot(preflight(origin, "GET")).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            origin,
            "expected {origin} to be admitted"
        );
    }
}

#[tokio::test]
async fn test_actual_request_carries_allow_origin_header() {
    let app = test_app();
    let origin = "https://christmas-tree-esnh.onrender.com";

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/message")
                .header(header::ORIGIN, origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        origin
    );
}

#[tokio::test]
async fn test_disallowed_origin_request_still_succeeds_server_side() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/message")
                .header(header::ORIGIN, "https://evil.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // No server-side rejection, just no allow headers
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
