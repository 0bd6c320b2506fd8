/**
 * Server Initialization
 *
 * Builds the whole application from a `ServerConfig`:
 * 1. Open the SQLite pool and run migrations
 * 2. Create the metrics registry
 * 3. Construct `AppState` (repositories, session issuer)
 * 4. Assemble the router with CORS, tracing and metrics layers
 *
 * Any failure here aborts startup.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::auth::errors::AuthError;
use crate::backend::metrics::Metrics;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Reasons the application could not be built
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database initialization failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("metrics registry initialization failed: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("session issuer initialization failed: {0}")]
    Auth(#[from] AuthError),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing SimpleNotes backend");

    let pool = connect_database(&config.database_url).await?;
    let app_state = AppState::new(pool, config, Metrics::new()?)?;

    let app = create_router(app_state, &config.cors_origins);
    tracing::info!("Router configured");

    Ok(app)
}
