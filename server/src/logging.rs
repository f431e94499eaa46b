//! Tracing setup and the per-request log line.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Level;

/// Install the global fmt subscriber. Safe to call more than once; only the
/// first call takes effect.
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}

/// Middleware that logs method, path, status and latency once the inner
/// service has produced a response. The response passes through untouched.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_secs_f64() * 1000.0,
        "HTTP request"
    );
    response
}
