//! App and authentication test helpers
//!
//! Builds a full router around a known `AppState` so tests can drive it
//! over HTTP and still reach the issuer and repositories directly.

use std::time::Duration;

use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use simplenotes::backend::metrics::Metrics;
use simplenotes::backend::routes::create_router;
use simplenotes::backend::server::{AppState, CorsOrigins, ServerConfig};
use sqlx::SqlitePool;

use super::database::create_test_pool;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "correct-horse";

/// Config with a fixed secret and the cheapest bcrypt cost
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .token_ttl(Duration::from_secs(3600))
        .build()
        .expect("Failed to build test config")
}

/// A running app plus the state behind it
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_pool(create_test_pool().await, &test_config()).await
    }

    pub async fn with_pool(pool: SqlitePool, config: &ServerConfig) -> Self {
        let state = AppState::new(
            pool,
            config,
            Metrics::new().expect("Failed to create metrics"),
        )
        .expect("Failed to build app state");
        let router = create_router(state.clone(), &config.cors_origins);
        let server = TestServer::new(router).expect("Failed to start test server");

        Self { server, state }
    }

    pub async fn with_cors(origins: CorsOrigins) -> Self {
        let mut config = test_config();
        config.cors_origins = origins;
        Self::with_pool(create_test_pool().await, &config).await
    }

    /// Register through the API and return the user with their token
    pub async fn register(&self, username: &str, password: &str) -> TestUser {
        let response = self
            .server
            .post("/api/register")
            .json(&json!({ "username": username, "password": password }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED, "{}", response.text());

        let body: Value = response.json();
        TestUser {
            id: body["user"]["id"].as_str().unwrap_or_default().to_string(),
            username: username.to_string(),
            password: password.to_string(),
            token: body["token"].as_str().unwrap_or_default().to_string(),
        }
    }
}

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub password: String,
    pub token: String,
}

impl TestUser {
    pub fn auth_header(&self) -> (HeaderName, HeaderValue) {
        bearer(&self.token)
    }
}

/// `Authorization: Bearer <token>` header pair
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("Invalid token header"),
    )
}
