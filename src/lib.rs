//! SimpleNotes - Main Library
//!
//! A small note-taking backend: accounts with username/password login,
//! JWT bearer sessions, and per-user notes over a JSON HTTP API.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and validation shared by handlers and tests
//!   - Note request/response bodies
//!   - `SharedError` for field validation failures
//!
//! - **`backend`** - The Axum server
//!   - Credential store and session issuer
//!   - Notes repository and handlers
//!   - Metrics, CORS and tracing layers
//!
//! # Usage
//!
//! ```rust,no_run
//! use simplenotes::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::builder().jwt_secret("change-me").build()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for input validation
//! - `backend::auth::AuthError` and `backend::auth::StoreError` for the auth core
//! - `backend::BackendError` converts all of the above into HTTP responses

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
