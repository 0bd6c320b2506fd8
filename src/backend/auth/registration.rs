/**
 * User Registration
 *
 * Validates a new account, hashes its password and stores it, then logs the
 * user straight in.
 *
 * # Validation
 *
 * - Username: 3-30 chars, starts with a letter, letters/digits/underscores
 * - Password: at least 8 characters
 * - Username must be unique (pre-checked, then enforced by the schema)
 */

use crate::backend::auth::errors::AuthError;
use crate::backend::auth::sessions::{IssuedToken, SessionIssuer};
use crate::backend::auth::users::{CredentialStore, StoreError, User, UserRepository};
use crate::shared::SharedError;

/// Minimum accepted password length in characters
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
pub fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Register a user and issue their first token
///
/// # Errors
///
/// * `AuthError::Validation` - bad username format or short password
/// * `AuthError::UsernameTaken` - handle already registered
pub async fn register(
    users: &UserRepository,
    issuer: &SessionIssuer,
    username: &str,
    password: &str,
) -> Result<(User, IssuedToken), AuthError> {
    if !is_valid_username(username) {
        return Err(SharedError::validation(
            "username",
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        )
        .into());
    }

    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_CHARS),
        )
        .into());
    }

    if users.find_by_handle(username).await?.is_some() {
        tracing::warn!("Username already exists: {}", username);
        return Err(AuthError::UsernameTaken);
    }

    let password_hash = issuer.hash_password(password)?;

    // A concurrent signup can still win the race; the UNIQUE index catches it.
    let user = users
        .create_user(username, password_hash)
        .await
        .map_err(|e| match e {
            StoreError::Conflict(_) => AuthError::UsernameTaken,
            other => AuthError::Store(other),
        })?;

    let token = issuer.issue(&user)?;
    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok((user, token))
}
