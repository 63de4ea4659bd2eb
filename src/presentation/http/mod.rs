//! HTTP Surface
//!
//! Route configuration and request handlers.

pub mod handlers;
pub mod routes;
