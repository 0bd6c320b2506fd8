//! Cross-cutting layer tests: auth middleware, CORS and metrics

#[macro_use]
mod common;

use axum::http::{
    header::{ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, CONTENT_TYPE, ORIGIN},
    HeaderValue, Method, StatusCode,
};
use chrono::Utc;
use common::{bearer, TestApp, TEST_PASSWORD};
use serde_json::json;
use simplenotes::backend::auth::CredentialStore;
use simplenotes::backend::server::CorsOrigins;

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new().await;
    app.register("alice", TEST_PASSWORD).await;
    let user = assert_ok!(app.state.users.find_by_handle("alice").await).unwrap();

    let long_ago = Utc::now().timestamp() as u64 - 2 * app.state.issuer.ttl().as_secs();
    let expired = assert_ok!(app.state.issuer.issue_at(&user, long_ago));
    let (name, value) = bearer(&expired.token);

    let response = app.server.get("/api/me").add_header(name, value).await;
    assert_error_body!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_auth_scheme_rejected() {
    let app = TestApp::new().await;
    let user = app.register("alice", TEST_PASSWORD).await;

    let response = app
        .server
        .get("/api/notes")
        .add_header(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Token {}", user.token)).unwrap(),
        )
        .await;
    assert_error_body!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_metrics_after_traffic() {
    let app = TestApp::new().await;
    app.register("alice", TEST_PASSWORD).await;
    app.server.get("/health").await;
    app.server
        .post("/api/login")
        .json(&json!({ "username": "alice", "password": "wrong-password" }))
        .await;
    app.server.get("/nowhere").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let content_type = response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap().to_string();
    assert_contains!(content_type, "text/plain");

    let text = response.text();
    assert_contains!(text, "http_requests_total");
    assert_contains!(text, "http_request_duration_seconds");
    assert_contains!(text, r#"path="/health""#);
    assert_contains!(text, r#"path="/api/register""#);
    assert_contains!(text, r#"path="unmatched""#);
    assert_contains!(text, r#"auth_login_attempts_total{outcome="failure"} 1"#);
}

#[tokio::test]
async fn test_note_paths_use_route_template() {
    let app = TestApp::new().await;
    let (name, value) = app.register("alice", TEST_PASSWORD).await.auth_header();
    app.server
        .get(&format!("/api/notes/{}", uuid::Uuid::new_v4()))
        .add_header(name, value)
        .await;

    let text = app.server.get("/metrics").await.text();
    assert_contains!(text, r#"path="/api/notes/{note_id}""#);
}

#[tokio::test]
async fn test_cors_preflight_any_origin() {
    let app = TestApp::new().await;

    let response = app
        .server
        .method(Method::OPTIONS, "/api/notes")
        .add_header(ORIGIN, HeaderValue::from_static("https://notes.example.com"))
        .add_header(ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("POST"))
        .await;

    assert!(response.status_code().is_success());
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_allow_list() {
    let origins: CorsOrigins = assert_ok!("https://notes.example.com".parse());
    let app = TestApp::with_cors(origins).await;

    let allowed = app
        .server
        .get("/health")
        .add_header(ORIGIN, HeaderValue::from_static("https://notes.example.com"))
        .await;
    assert_eq!(
        allowed.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://notes.example.com"
    );

    let denied = app
        .server
        .get("/health")
        .add_header(ORIGIN, HeaderValue::from_static("https://evil.example.com"))
        .await;
    assert!(denied.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
