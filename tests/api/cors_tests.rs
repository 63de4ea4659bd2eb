//! CORS flag behavior
//!
//! The `server.cors` flag is the only thing separating a CORS-enabled
//! instance from a plain one. These tests drive both variants through
//! the same router factory.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};

use crate::TestApp;

async fn allow_origin_header(app: &TestApp) -> Option<String> {
    let response = app.get_with_origin("/health", "http://example.com").await;
    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|value| value.to_str().unwrap_or_default().to_string())
}

#[tokio::test]
async fn enabled_flag_allows_any_origin() {
    let app = TestApp::from_yaml("server:\n  cors: true\n");

    assert_eq!(allow_origin_header(&app).await.as_deref(), Some("*"));
}

#[tokio::test]
async fn disabled_flag_sends_no_cors_headers() {
    let app = TestApp::from_yaml("server:\n  cors: false\n");

    assert_eq!(allow_origin_header(&app).await, None);
}

#[tokio::test]
async fn missing_cors_key_means_disabled() {
    let app = TestApp::from_yaml("server:\n  url: http://localhost:5000\n");

    assert_eq!(allow_origin_header(&app).await, None);
}

#[tokio::test]
async fn missing_server_block_means_disabled() {
    let app = TestApp::from_yaml("metadata:\n  title: No Server Block\n");

    assert_eq!(allow_origin_header(&app).await, None);
}

#[tokio::test]
async fn default_settings_mean_disabled() {
    let app = TestApp::with_defaults();

    assert_eq!(allow_origin_header(&app).await, None);
}

#[tokio::test]
async fn truthy_scalar_forms_enable_cors() {
    for yaml in [
        "server:\n  cors: 1\n",
        "server:\n  cors: \"true\"\n",
        "server:\n  cors: \"on\"\n",
    ] {
        let app = TestApp::from_yaml(yaml);
        assert_eq!(
            allow_origin_header(&app).await.as_deref(),
            Some("*"),
            "expected CORS headers for {:?}",
            yaml
        );
    }
}

#[tokio::test]
async fn falsy_scalar_forms_keep_cors_disabled() {
    for yaml in ["server:\n  cors: 0\n", "server:\n  cors: \"off\"\n"] {
        let app = TestApp::from_yaml(yaml);
        assert_eq!(
            allow_origin_header(&app).await,
            None,
            "expected no CORS headers for {:?}",
            yaml
        );
    }
}

#[tokio::test]
async fn preflight_is_answered_when_enabled() {
    let app = TestApp::from_yaml("server:\n  cors: true\n");

    let response = app
        .request(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/health")
                .header(header::ORIGIN, "http://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}
