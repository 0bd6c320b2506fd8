//! Middleware Module
//!
//! Request processing that runs around the handlers:
//!
//! - **`auth`** - bearer-token authentication for protected routes
//! - **`metrics`** - per-request Prometheus accounting
//! - **`cors`** - CORS layer construction
//! - **`extract`** - `Json`/`Path` extractors that reject with `BackendError`

pub mod auth;
pub mod cors;
pub mod extract;
pub mod metrics;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
pub use cors::cors_layer;
pub use extract::{ApiJson, ApiPath};
pub use metrics::track_metrics;
