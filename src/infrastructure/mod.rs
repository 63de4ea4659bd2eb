//! Infrastructure Layer
//!
//! Process-wide facilities that sit below the HTTP surface. Currently this
//! is only the Prometheus metrics registry.

pub mod metrics;
