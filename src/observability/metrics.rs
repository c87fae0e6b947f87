//! Metrics collection and exposition.
//!
//! # Metrics
//! - `rooms_http_requests_total` (counter): requests by method, status
//! - `rooms_http_request_duration_seconds` (histogram): latency distribution
//! - `rooms_reservations_total` (counter): reservation attempts by outcome
//! - `rooms_uploads_total` (counter): image uploads by outcome
//! - `rooms_inventory_size` (gauge): rooms currently held in the store
//!
//! Recording is a no-op until a recorder is installed, so library code and
//! tests can call these freely.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed HTTP request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];
    counter!("rooms_http_requests_total", &labels).increment(1);
    histogram!("rooms_http_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Record a reservation attempt ("reserved", "invalid", "over_capacity", "not_found").
pub fn record_reservation(outcome: &'static str) {
    counter!("rooms_reservations_total", "outcome" => outcome).increment(1);
}

/// Record an upload attempt.
pub fn record_upload(outcome: &'static str) {
    counter!("rooms_uploads_total", "outcome" => outcome).increment(1);
}

pub fn record_inventory_size(size: usize) {
    gauge!("rooms_inventory_size").set(size as f64);
}
