//! CORS Middleware Configuration
//!
//! The `server.cors` flag carries no options of its own, so the layer uses
//! the middleware's permissive defaults: any origin, any method, any
//! headers. Deployments needing a tighter policy put a reverse proxy in
//! front instead.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// Create the permissive CORS layer
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Wrap the router with CORS middleware iff `enabled`.
///
/// The router is returned unchanged when the flag is false, so callers can
/// thread it through unconditionally. Keeping the decision here, as a pure
/// function of the flag, makes it testable without any global state.
pub fn apply_cors(router: Router, enabled: bool) -> Router {
    if enabled {
        router.layer(cors_layer())
    } else {
        router
    }
}
