//! Health Check Handlers
//!
//! Liveness and readiness endpoints for load balancers and orchestrators.
//! The server keeps no connections to external systems, so readiness only
//! reports process uptime.

use axum::Json;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Instant;

/// Server start time, captured once at startup
static SERVER_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Server start timestamp in UTC
static SERVER_START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Initialize server start time (call during startup)
pub fn init_server_start() {
    Lazy::force(&SERVER_START);
    Lazy::force(&SERVER_START_TIME);
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
}

/// Readiness probe response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub uptime_seconds: u64,
    pub started_at: String,
}

/// GET /health
///
/// Overall service health.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health/live
///
/// Liveness probe. Answers as long as the process can serve requests.
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse { status: "alive" })
}

/// GET /health/ready
///
/// Readiness probe with uptime information.
pub async fn readiness() -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        status: "ready",
        uptime_seconds: SERVER_START.elapsed().as_secs(),
        started_at: SERVER_START_TIME.to_rfc3339(),
    })
}
