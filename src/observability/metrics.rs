//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): handled requests by service
//! - `fanout_fetch_total` (counter): upstream fetches by outcome
//! - `fanout_gather_duration_seconds` (histogram): time to collect all outcomes
//! - `fanout_gather_targets` (histogram): targets per gather

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must run inside a Tokio runtime. Failure is logged, not fatal.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(service: &'static str) {
    metrics::counter!("http_requests_total", "service" => service).increment(1);
}

pub fn record_fetch(outcome: &'static str) {
    metrics::counter!("fanout_fetch_total", "outcome" => outcome).increment(1);
}

pub fn record_gather(targets: usize, start: Instant) {
    metrics::histogram!("fanout_gather_duration_seconds").record(start.elapsed().as_secs_f64());
    metrics::histogram!("fanout_gather_targets").record(targets as f64);
}
