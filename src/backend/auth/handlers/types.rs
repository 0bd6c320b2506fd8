/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the register, login and me handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::sessions::IssuedToken;
use crate::backend::auth::users::User;

/// Register request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    /// Verified against the stored bcrypt hash, never logged
    pub password: String,
}

/// Auth response
///
/// Returned by register and login. Contains the bearer token and the public
/// part of the user record.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT to send as `Authorization: Bearer <token>`
    pub token: String,
    /// Always `"Bearer"`
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: u64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(issued: IssuedToken, user: User) -> Self {
        Self {
            expires_in: issued.expires_in(),
            token: issued.token,
            token_type: "Bearer".to_string(),
            user: user.into(),
        }
    }
}

/// User response (without the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}
