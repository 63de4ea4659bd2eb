//! Route Definitions
//!
//! Maps every endpoint to its handler and attaches the per-request
//! metrics layer. Conditional middleware (CORS, compression) is applied
//! on top of this router in `startup::build_router`.

use axum::http::header;
use axum::http::Uri;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::infrastructure::metrics;
use crate::presentation::http::handlers::{health, landing};
use crate::presentation::middleware::track_metrics;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing::landing))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/metrics", get(metrics_handler))
        .fallback(not_found)
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint
async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let body = metrics::gather_metrics()
        .map_err(|e| AppError::Internal(format!("Failed to encode metrics: {}", e)))?;

    Ok((
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    ))
}

/// Fallback for paths with no route
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No resource at {}", uri.path()))
}
