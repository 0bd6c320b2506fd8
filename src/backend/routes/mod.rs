//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly and layers
//! └── api_routes.rs   - Endpoint table and the health probe
//! ```

/// Main router creation
pub mod router;

/// API endpoint table
pub mod api_routes;

pub use api_routes::health;
pub use router::create_router;
