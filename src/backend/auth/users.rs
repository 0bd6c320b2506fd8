/**
 * User Model and Credential Store
 *
 * This module holds the user record, the `CredentialStore` seam consumed by
 * the session issuer, and `UserRepository`, its SQLite implementation.
 */

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use uuid::Uuid;

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display handle (unique, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// Query or connection failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A uniqueness constraint rejected the write
    #[error("{0} already exists")]
    Conflict(String),
}

/// Read access to user identity records
///
/// `Ok(None)` means the handle does not resolve; `Err` is reserved for the
/// store itself failing.
pub trait CredentialStore: Send + Sync {
    fn find_by_handle(
        &self,
        handle: &str,
    ) -> impl Future<Output = Result<Option<User>, StoreError>> + Send;
}

/// SQLite-backed user repository
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user
    ///
    /// # Arguments
    /// * `username` - User's chosen handle
    /// * `password_hash` - Hashed password
    ///
    /// # Returns
    /// Created user, or `StoreError::Conflict` if the handle is taken
    pub async fn create_user(
        &self,
        username: &str,
        password_hash: String,
    ) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(&password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Conflict("username".to_string())
            }
            other => StoreError::Database(other),
        })?;

        Ok(user)
    }

    /// Get user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

impl CredentialStore for UserRepository {
    async fn find_by_handle(&self, handle: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = ?1
            "#,
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
