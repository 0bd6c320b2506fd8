/**
 * Login Handler
 *
 * `POST /api/login`: checks the username/password pair through the session
 * issuer and returns a bearer token.
 *
 * # Security
 *
 * - Unknown username and wrong password produce the same 401 response
 * - Passwords are never logged or returned in responses
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::errors::AuthError;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::sessions::SessionIssuer;
use crate::backend::auth::users::UserRepository;
use crate::backend::error::BackendError;
use crate::backend::metrics::Metrics;
use crate::backend::middleware::ApiJson;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown user or wrong password
/// * `500 Internal Server Error` - database or token failure
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "token_type": "Bearer",
///   "expires_in": 3600,
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "username": "alice",
///     "created_at": "2024-01-01T00:00:00Z"
///   }
/// }
/// ```
pub async fn login(
    State(users): State<UserRepository>,
    State(issuer): State<Arc<SessionIssuer>>,
    State(metrics): State<Metrics>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let (user, issued) = match issuer
        .authenticate(&users, &request.username, &request.password)
        .await
    {
        Ok(found) => found,
        Err(err) => {
            if matches!(err, AuthError::InvalidCredentials) {
                metrics.observe_login(false);
            }
            return Err(err.into());
        }
    };
    metrics.observe_login(true);

    tracing::info!("User logged in successfully: {}", user.username);
    Ok(Json(AuthResponse::new(issued, user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::registration::register;
    use crate::backend::server::state::{test_state, AppState};
    use axum::http::StatusCode;

    async fn state_with_alice() -> AppState {
        let state = test_state().await;
        register(&state.users, &state.issuer, "alice", "correct-horse")
            .await
            .unwrap();
        state
    }

    async fn attempt(state: &AppState, username: &str, password: &str) -> Result<Json<AuthResponse>, BackendError> {
        login(
            State(state.users.clone()),
            State(state.issuer.clone()),
            State(state.metrics.clone()),
            ApiJson(LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            }),
        )
        .await
    }

    #[tokio::test]
    async fn test_login_success() {
        let state = state_with_alice().await;

        let Json(response) = attempt(&state, "alice", "correct-horse").await.unwrap();
        assert_eq!(response.user.username, "alice");
        assert_eq!(response.expires_in, 3600);

        let claims = state.issuer.verify(&response.token).unwrap();
        assert_eq!(claims.sub, response.user.id.to_string());
        assert_eq!(claims.username, "alice");
    }

    #[tokio::test]
    async fn test_login_invalid_password() {
        let state = state_with_alice().await;
        let err = attempt(&state, "alice", "wrong").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_user_not_found() {
        let state = state_with_alice().await;
        let err = attempt(&state, "nobody", "correct-horse").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_failures_look_identical() {
        let state = state_with_alice().await;
        let unknown = attempt(&state, "nobody", "x").await.unwrap_err();
        let wrong = attempt(&state, "alice", "x").await.unwrap_err();
        assert_eq!(unknown.message(), wrong.message());
    }

    #[tokio::test]
    async fn test_login_outcomes_counted() {
        let state = state_with_alice().await;
        attempt(&state, "alice", "correct-horse").await.unwrap();
        attempt(&state, "alice", "wrong").await.unwrap_err();

        let text = state.metrics.render().unwrap();
        assert!(text.contains(r#"auth_login_attempts_total{outcome="success"} 1"#));
        assert!(text.contains(r#"auth_login_attempts_total{outcome="failure"} 1"#));
    }
}
