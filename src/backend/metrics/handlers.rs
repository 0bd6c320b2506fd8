/**
 * Metrics Endpoint
 *
 * `GET /metrics` in the Prometheus text exposition format.
 */

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::backend::error::BackendError;
use crate::backend::metrics::registry::Metrics;

/// Content type of the Prometheus text format
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn get_metrics(
    State(metrics): State<Metrics>,
) -> Result<impl IntoResponse, BackendError> {
    let body = metrics.render().map_err(|e| {
        tracing::error!("Failed to encode metrics: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode metrics")
    })?;

    Ok(([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], body))
}
