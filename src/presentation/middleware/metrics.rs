//! Request Metrics Middleware
//!
//! Times every request and records method/path/status into the Prometheus
//! registry.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use crate::infrastructure::metrics;

/// Record request count and latency for each handled request.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    metrics::record_http_request(
        method.as_str(),
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
