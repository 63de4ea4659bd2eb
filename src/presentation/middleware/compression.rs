//! Response Compression
//!
//! Gzip compression, attached only when `server.gzip` is set. Mirrors the
//! conditional composition used for CORS.

use axum::Router;
use tower_http::compression::CompressionLayer;

/// Wrap the router with gzip response compression iff `enabled`.
pub fn apply_compression(router: Router, enabled: bool) -> Router {
    if enabled {
        router.layer(CompressionLayer::new())
    } else {
        router
    }
}
