//! Metrics collection and exposition.
//!
//! # Metrics
//! - `httpbin_requests_total` (counter): requests by method, route, status
//!
//! The `method` label is limited to the standard verbs plus `other`, so
//! arbitrary method tokens cannot create new series.
//! - `httpbin_request_duration_seconds` (histogram): latency by route
//!
//! Recording is a no-op until a recorder is installed.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Label value for a request method.
pub fn method_label(method: &str) -> &'static str {
    match method {
        "GET" => "GET",
        "POST" => "POST",
        "PUT" => "PUT",
        "DELETE" => "DELETE",
        "PATCH" => "PATCH",
        "HEAD" => "HEAD",
        "OPTIONS" => "OPTIONS",
        _ => "other",
    }
}

/// Record one dispatched request.
pub fn record_request(method: &str, status: u16, route: &'static str, start: Instant) {
    metrics::counter!(
        "httpbin_requests_total",
        "method" => method_label(method),
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!("httpbin_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}
