/**
 * Get Current User Handler
 *
 * `GET /api/me` returns the account behind the bearer token. The route sits
 * behind `auth_middleware`, so the token has already been verified by the
 * time this runs.
 *
 * # Response
 *
 * Returns user information without sensitive data (no password hash).
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::UserRepository;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - the account no longer exists
/// * `500 Internal Server Error` - database error
pub async fn get_me(
    State(users): State<UserRepository>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = users.find_by_id(auth.user_id).await?.ok_or_else(|| {
        tracing::warn!("Authenticated user vanished: {}", auth.user_id);
        BackendError::unauthorized("User not found")
    })?;

    Ok(Json(UserResponse::from(user)))
}
