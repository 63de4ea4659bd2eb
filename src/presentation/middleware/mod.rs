//! Middleware
//!
//! Tower middleware for request processing. The CORS and compression layers
//! are conditional: whether they are attached at all is decided once at
//! startup from the corresponding `server.*` config flags.

pub mod compression;
pub mod cors;
pub mod logging;
pub mod metrics;

pub use compression::apply_compression;
pub use cors::{apply_cors, cors_layer};
pub use logging::create_trace_layer;
pub use metrics::track_metrics;
