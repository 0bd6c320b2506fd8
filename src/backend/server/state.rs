/**
 * Application State Management
 *
 * `AppState` is the one container handlers see. It is built explicitly by
 * `create_app` (or by tests) from a pool and a `ServerConfig`; there are no
 * global extension objects.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the piece they
 * need, e.g. `State(users): State<UserRepository>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::errors::AuthError;
use crate::backend::auth::sessions::SessionIssuer;
use crate::backend::auth::users::UserRepository;
use crate::backend::metrics::Metrics;
use crate::backend::notes::db::NoteRepository;
use crate::backend::server::config::ServerConfig;

/// Shared application state
///
/// Every field is cheap to clone: the repositories wrap the pool, the
/// issuer sits behind an `Arc`, and `Metrics` holds reference-counted
/// collectors.
#[derive(Clone)]
pub struct AppState {
    /// Credential Store
    pub users: UserRepository,
    pub notes: NoteRepository,
    /// Session Issuer
    pub issuer: Arc<SessionIssuer>,
    pub metrics: Metrics,
}

impl AppState {
    /// Wire up all collaborators for an already-open pool
    pub fn new(pool: SqlitePool, config: &ServerConfig, metrics: Metrics) -> Result<Self, AuthError> {
        let issuer = SessionIssuer::new(
            config.jwt_secret.as_bytes(),
            config.token_ttl,
            config.bcrypt_cost,
        )?;

        Ok(Self {
            users: UserRepository::new(pool.clone()),
            notes: NoteRepository::new(pool),
            issuer: Arc::new(issuer),
            metrics,
        })
    }
}

impl FromRef<AppState> for UserRepository {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for NoteRepository {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.notes.clone()
    }
}

impl FromRef<AppState> for Arc<SessionIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.issuer.clone()
    }
}

impl FromRef<AppState> for Metrics {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.metrics.clone()
    }
}

/// In-memory state for unit tests
#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    use crate::backend::server::config::connect_database;

    let pool = connect_database("sqlite::memory:").await.unwrap();
    let config = ServerConfig::builder()
        .jwt_secret("unit-test-secret")
        .bcrypt_cost(4)
        .build()
        .unwrap();
    AppState::new(pool, &config, Metrics::new().unwrap()).unwrap()
}
