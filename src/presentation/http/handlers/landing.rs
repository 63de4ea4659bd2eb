//! Landing Page Handler
//!
//! Root document describing the service instance. Links are built from
//! the externally visible `server.url`, not the bind address, so they
//! stay correct behind a reverse proxy.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::startup::AppState;

/// Landing page document
#[derive(Debug, Serialize)]
pub struct LandingResponse {
    pub title: String,
    pub description: String,
    pub version: &'static str,
    pub links: Vec<Link>,
}

/// Link to a resource exposed by this instance
#[derive(Debug, Serialize)]
pub struct Link {
    pub href: String,
    pub rel: &'static str,
    #[serde(rename = "type")]
    pub media_type: &'static str,
    pub title: &'static str,
}

/// GET /
///
/// Describes the running instance and where to find its resources.
pub async fn landing(State(state): State<AppState>) -> Json<LandingResponse> {
    let base = state.settings.server.url.trim_end_matches('/').to_string();

    Json(LandingResponse {
        title: state.settings.metadata.title.clone(),
        description: state.settings.metadata.description.clone(),
        version: env!("CARGO_PKG_VERSION"),
        links: vec![
            Link {
                href: format!("{}/", base),
                rel: "self",
                media_type: "application/json",
                title: "This document",
            },
            Link {
                href: format!("{}/health", base),
                rel: "health",
                media_type: "application/json",
                title: "Service health",
            },
            Link {
                href: format!("{}/metrics", base),
                rel: "metrics",
                media_type: "text/plain",
                title: "Prometheus metrics",
            },
        ],
    })
}
