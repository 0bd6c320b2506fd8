/**
 * Authentication Middleware
 *
 * Protects routes that require a logged-in user. It extracts the bearer
 * token from the Authorization header, verifies it with the session issuer,
 * and makes the user available to handlers through the `AuthUser` extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::errors::AuthError;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from the JWT
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Pull the token out of `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized("Missing Authorization header")
        })?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthorized("Authorization header must be 'Bearer <token>'")
        })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Checks that the user still exists
/// 4. Attaches `AuthenticatedUser` to the request extensions
///
/// Returns 401 Unauthorized if any step fails.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?;
    let claims = app_state.issuer.verify(token)?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        BackendError::from(AuthError::InvalidToken)
    })?;

    if app_state.users.find_by_id(user_id).await?.is_none() {
        tracing::warn!("Token for unknown user: {}", user_id);
        return Err(AuthError::InvalidToken.into());
    }

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only valid on routes behind `auth_middleware`; elsewhere it rejects with
/// 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("Authentication required")
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_token_missing() {
        let err = bearer_token(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert_eq!(
            bearer_token(&headers).unwrap_err().status_code(),
            StatusCode::UNAUTHORIZED
        );

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert!(bearer_token(&headers).is_err());
    }

    #[tokio::test]
    async fn test_extractor_requires_middleware() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("/api/me")
            .body(())
            .unwrap()
            .into_parts();

        let rejection = AuthUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(rejection.status_code(), StatusCode::UNAUTHORIZED);

        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
        };
        parts.extensions.insert(user.clone());
        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted, user);
    }
}
