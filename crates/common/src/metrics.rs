//! Prometheus metrics shared by both service binaries.
//!
//! Each process owns its registry; counters carry the process's traffic only.

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use once_cell::sync::Lazy;
use prometheus::{register_histogram, register_int_counter, Encoder, Histogram, IntCounter, TextEncoder};

pub static REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "taskshop_requests_total",
        "Total HTTP requests handled by this service"
    )
    .expect("register requests_total")
});

pub static REQUEST_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "taskshop_request_duration_seconds",
        "Request duration in seconds",
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register request_duration")
});

/// Axum middleware recording request count and duration.
pub async fn track(req: Request, next: Next) -> Response {
    REQUESTS_TOTAL.inc();
    let timer = REQUEST_DURATION.start_timer();
    let res = next.run(req).await;
    timer.observe_duration();
    res
}

/// Render the default registry in Prometheus text format.
pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
