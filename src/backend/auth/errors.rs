/**
 * Authentication Errors
 *
 * Every failure of the credential check collapses into
 * `InvalidCredentials`; callers cannot tell an unknown username from a wrong
 * password.
 */

use thiserror::Error;

use crate::backend::auth::users::StoreError;
use crate::shared::SharedError;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Bad signature, malformed token or expired token
    #[error("invalid or expired token")]
    InvalidToken,

    #[error("username already taken")]
    UsernameTaken,

    #[error(transparent)]
    Validation(#[from] SharedError),

    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Issue time plus TTL does not fit in a timestamp
    #[error("token expiry out of range")]
    ExpiryOverflow,

    #[error("token encoding failed: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
