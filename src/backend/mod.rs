//! Backend Module
//!
//! All server-side code for SimpleNotes: an Axum HTTP server backed by
//! SQLite, with bcrypt passwords and HS256 bearer tokens.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app construction
//! - **`routes`** - Endpoint table and router layers
//! - **`auth`** - Credential store, session issuer, account handlers
//! - **`notes`** - Per-user notes storage and handlers
//! - **`metrics`** - Prometheus registry and `/metrics`
//! - **`middleware`** - Bearer auth, CORS, request metrics
//! - **`error`** - `BackendError` and its JSON response mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── notes/          - Notes CRUD
//! ├── metrics/        - Prometheus metrics
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` is built once by `create_app` and cloned into each handler.
//! It holds the two repositories (sharing one `SqlitePool`), the session
//! issuer behind an `Arc`, and the metrics registry. Handlers pull out the
//! part they need through `FromRef`.
//!
//! # Example
//!
//! ```rust,no_run
//! use simplenotes::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Notes storage and handlers
pub mod notes;

/// Prometheus metrics
pub mod metrics;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
