/**
 * Backend Error Types
 *
 * `BackendError` is what HTTP handlers and middleware return. Each variant
 * knows its status code, and `conversion.rs` renders it as a JSON body.
 *
 * # Error Categories
 *
 * - `HandlerError` - request-level failures with an explicit status
 *   (missing headers, unknown note, malformed input)
 * - `Auth` - credential, token and registration failures
 * - `Store` - persistence failures
 * - `SharedError` - payload validation failures
 *
 * Internal failures (database, hashing, token encoding) are reported to the
 * client as a bare 500; the detail only goes to the log.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::errors::AuthError;
use crate::backend::auth::users::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use simplenotes::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Note not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., missing headers, unknown resource)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Authentication or registration failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Payload validation failure
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// 401 with the given message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// 404 with the given message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Auth` - 401 for bad credentials/tokens, 409 for a taken username,
    ///   400 for validation, 500 otherwise
    /// - `Store` - 409 on conflict, 500 otherwise
    /// - `SharedError` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials | AuthError::InvalidToken => {
                    StatusCode::UNAUTHORIZED
                }
                AuthError::UsernameTaken => StatusCode::CONFLICT,
                AuthError::Validation(_) => StatusCode::BAD_REQUEST,
                AuthError::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,
                AuthError::Hashing(_)
                | AuthError::ExpiryOverflow
                | AuthError::TokenEncoding(_)
                | AuthError::Store(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Store(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            return "Internal server error".to_string();
        }
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Auth(AuthError::Validation(err)) | Self::SharedError(err) => {
                err.detail().to_string()
            }
            Self::Auth(err) => err.to_string(),
            Self::Store(err) => err.to_string(),
        }
    }
}
