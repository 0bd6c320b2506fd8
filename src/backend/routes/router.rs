/**
 * Router Configuration
 *
 * Combines the API routes with the cross-cutting layers into the final
 * `Router<()>`.
 *
 * # Layer Order
 *
 * Outermost first:
 * 1. CORS (answers preflight requests before anything else runs)
 * 2. HTTP tracing spans
 * 3. Request metrics (sees the matched route template)
 */

use axum::{middleware::from_fn_with_state, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::middleware::{cors_layer, track_metrics};
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::CorsOrigins;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// Unknown paths get a JSON 404 from the fallback, in the same shape as
/// every other error.
pub fn create_router(app_state: AppState, cors: &CorsOrigins) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    let router = router.fallback(|| async { BackendError::not_found("Route not found") });

    router
        .layer(from_fn_with_state(app_state.metrics.clone(), track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .with_state(app_state)
}
