/**
 * Request Extractors
 *
 * `ApiJson` and `ApiPath` wrap axum's `Json` and `Path` so that a malformed
 * body or path parameter is reported as a `BackendError` (400 with the
 * usual JSON error body) instead of axum's plain-text rejection.
 */

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// JSON request body
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

/// Typed path parameters
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ApiPath(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Login {
        username: String,
        password: String,
    }

    fn json_request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/api/login")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let ApiJson(login) = ApiJson::<Login>::from_request(
            json_request(r#"{"username":"alice","password":"correct-horse"}"#),
            &(),
        )
        .await
        .unwrap();
        assert_eq!(login.username, "alice");
        assert_eq!(login.password, "correct-horse");
    }

    #[tokio::test]
    async fn test_missing_field_is_400() {
        let err = ApiJson::<Login>::from_request(json_request(r#"{"username":"alice"}"#), &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("password"));
    }

    #[tokio::test]
    async fn test_syntax_error_and_missing_content_type_are_400() {
        let err = ApiJson::<Login>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/api/login")
            .body(Body::from("{}"))
            .unwrap();
        let err = ApiJson::<Login>::from_request(request, &()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
