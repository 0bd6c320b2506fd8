/**
 * Register Handler
 *
 * `POST /api/register`: creates the account and returns a token so the
 * client is logged in immediately.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::registration::register as register_user;
use crate::backend::auth::sessions::SessionIssuer;
use crate::backend::auth::users::UserRepository;
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid username format or password too short
/// * `409 Conflict` - username already taken
/// * `500 Internal Server Error` - hashing, database or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "correct-horse"
/// }
/// ```
pub async fn register(
    State(users): State<UserRepository>,
    State(issuer): State<Arc<SessionIssuer>>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!("Register request for username: {}", request.username);

    let (user, issued) = register_user(&users, &issuer, &request.username, &request.password).await?;

    Ok((StatusCode::CREATED, Json(AuthResponse::new(issued, user))))
}
