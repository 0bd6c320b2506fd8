/**
 * API Route Handlers
 *
 * Defines the account, notes and operational endpoints.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/register` - create an account
 * - `POST /api/login` - exchange credentials for a token
 * - `GET /health` - liveness probe
 * - `GET /metrics` - Prometheus exposition
 *
 * ## Authenticated (Bearer token)
 * - `GET /api/me` - current user info
 * - `GET|POST /api/notes` - list / create notes
 * - `GET|PUT|DELETE /api/notes/{note_id}` - single note
 */

use axum::{
    middleware::from_fn_with_state,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use crate::backend::auth::{get_me, login, register};
use crate::backend::metrics::get_metrics;
use crate::backend::middleware::auth_middleware;
use crate::backend::notes::{create_note, delete_note, get_note, list_notes, update_note};
use crate::backend::server::state::AppState;

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Configure API routes
///
/// Public routes are added directly. Protected routes get
/// `auth_middleware` as a route layer, so requests that match no route
/// still fall through to the 404 fallback instead of a 401.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/me", get(get_me))
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{note_id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router
        // Authentication endpoints
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        // Operational endpoints
        .route("/health", get(health))
        .route("/metrics", get(get_metrics))
        .merge(protected)
}
