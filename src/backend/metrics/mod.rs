//! Metrics Module
//!
//! Prometheus collectors for request counts, request latency and login
//! outcomes, plus the `/metrics` scrape endpoint. Requests are recorded by
//! `middleware::metrics::track_metrics`.

/// Collector registry
pub mod registry;

/// Scrape endpoint
pub mod handlers;

pub use handlers::get_metrics;
pub use registry::Metrics;
