//! Metrics collection and exposition.
//!
//! # Metrics
//! - `ais_requests_total` (counter): requests by resource family and status
//! - `ais_request_duration_seconds` (histogram): dispatch latency by family
//! - `ais_disconnects_total` (counter): requests abandoned by the client
//! - `ais_folder_lookups_total` (counter): folder lookups by source
//!   (`cache` or `store`)
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Prometheus exporter only runs when enabled in config

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed request.
pub fn record_request(family: &'static str, status: u16, start: Instant) {
    metrics::counter!("ais_requests_total", "family" => family, "status" => status.to_string())
        .increment(1);
    metrics::histogram!("ais_request_duration_seconds", "family" => family)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_disconnect(family: &'static str) {
    metrics::counter!("ais_disconnects_total", "family" => family).increment(1);
}

pub fn record_folder_lookup(source: &'static str) {
    metrics::counter!("ais_folder_lookups_total", "source" => source).increment(1);
}
