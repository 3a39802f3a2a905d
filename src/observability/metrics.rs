//! Metrics collection and exposition.
//!
//! # Metrics
//! - `vanity_requests_total` (counter): requests by outcome
//! - `vanity_request_duration_seconds` (histogram): latency by outcome
//!
//! Outcomes: `index`, `redirect_index`, `not_found`, `redirect`, `vanity`.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record one handled request.
pub fn record_request(outcome: &'static str, start: Instant) {
    metrics::counter!("vanity_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("vanity_request_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}
