/**
 * Request Metrics Middleware
 *
 * Records method, route template, status and latency of every request into
 * the application's `Metrics`.
 */

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::backend::metrics::Metrics;

/// Label used for requests that matched no route
pub const UNMATCHED_PATH: &str = "unmatched";

pub async fn track_metrics(
    State(metrics): State<Metrics>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH.to_owned());

    let response = next.run(request).await;

    metrics.observe_request(
        method.as_str(),
        &path,
        response.status().as_u16(),
        started.elapsed(),
    );
    response
}
