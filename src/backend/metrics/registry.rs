/**
 * Prometheus Registry
 *
 * One `Metrics` value per application instance, built by `create_app` and
 * handed to the tracking middleware and the `/metrics` handler. It owns its
 * own `Registry` rather than using the process-wide default, so two apps in
 * the same process (as in tests) never share counters.
 */

use std::time::Duration;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

/// Request and login metrics
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    http_requests: IntCounterVec,
    http_latency: HistogramVec,
    login_attempts: IntCounterVec,
}

impl Metrics {
    /// Create and register all collectors
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests handled"),
            &["method", "path", "status"],
        )?;
        let http_latency = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request latency in seconds",
            ),
            &["method", "path"],
        )?;
        let login_attempts = IntCounterVec::new(
            Opts::new("auth_login_attempts_total", "Login attempts by outcome"),
            &["outcome"],
        )?;

        registry.register(Box::new(http_requests.clone()))?;
        registry.register(Box::new(http_latency.clone()))?;
        registry.register(Box::new(login_attempts.clone()))?;

        Ok(Self {
            registry,
            http_requests,
            http_latency,
            login_attempts,
        })
    }

    /// Record one finished request
    ///
    /// `path` is the route template (`/api/notes/{note_id}`), never the raw
    /// URI, to keep label cardinality bounded.
    pub fn observe_request(&self, method: &str, path: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        self.http_requests
            .with_label_values(&[method, path, status.as_str()])
            .inc();
        self.http_latency
            .with_label_values(&[method, path])
            .observe(elapsed.as_secs_f64());
    }

    /// Record a login attempt; `success` selects the outcome label
    pub fn observe_login(&self, success: bool) {
        let outcome = if success { "success" } else { "failure" };
        self.login_attempts.with_label_values(&[outcome]).inc();
    }

    /// Render every collector in the Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_observed_request() {
        let metrics = Metrics::new().unwrap();
        metrics.observe_request("GET", "/api/notes", 200, Duration::from_millis(5));

        let text = metrics.render().unwrap();
        assert!(text.contains("http_requests_total"));
        assert!(text.contains(r#"path="/api/notes""#));
        assert!(text.contains("http_request_duration_seconds_bucket"));
    }

    #[test]
    fn test_login_outcomes() {
        let metrics = Metrics::new().unwrap();
        metrics.observe_login(true);
        metrics.observe_login(false);
        metrics.observe_login(false);

        let text = metrics.render().unwrap();
        assert!(text.contains(r#"auth_login_attempts_total{outcome="failure"} 2"#));
        assert!(text.contains(r#"auth_login_attempts_total{outcome="success"} 1"#));
    }

    #[test]
    fn test_instances_are_independent() {
        let first = Metrics::new().unwrap();
        let second = Metrics::new().unwrap();
        first.observe_login(true);

        assert!(!second.render().unwrap().contains(r#"outcome="success"} 1"#));
    }
}
