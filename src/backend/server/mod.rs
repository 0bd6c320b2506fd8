//! Server Module
//!
//! Configuration loading, application state and app construction.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - ServerConfig and database connection
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - create_app
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: pool + migrations via `connect_database`
//! 3. **State Creation**: repositories, session issuer, metrics
//! 4. **Router Creation**: routes plus CORS/trace/metrics layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{connect_database, CorsOrigins, ServerConfig};
pub use init::{create_app, StartupError};
pub use state::AppState;
