//! # GeoAPI Server
//!
//! A configuration-driven serving harness for a geospatial web API:
//! - Typed settings loaded from the YAML file named by `GEOAPI_CONFIG`
//! - Conditional CORS and gzip middleware driven by config flags
//! - Landing, health, and Prometheus metrics endpoints
//!
//! ## Startup sequence
//!
//! The binary runs one linear bootstrap, once per process:
//!
//! 1. [`telemetry::init_tracing`] sets up structured logging.
//! 2. [`config::Settings::load`] resolves configuration (defaults, then the
//!    optional YAML file, then environment overrides). Malformed YAML is a
//!    fatal startup error; an unset variable or missing file is not.
//! 3. [`startup::Application::build`] turns settings into a bound server via
//!    the [`startup::build_router`] factory.
//! 4. [`startup::Application::run_until_stopped`] serves until SIGINT/SIGTERM.
//!
//! ## Module Structure
//!
//! ```text
//! geoapi_server/
//! +-- config/         Configuration loading and the Settings types
//! +-- infrastructure/ Prometheus metrics registry
//! +-- presentation/   HTTP routes, handlers, and middleware
//! +-- shared/         Common utilities (errors)
//! +-- startup.rs      Router factory and server lifecycle
//! +-- telemetry.rs    Tracing setup
//! ```

// Configuration module
pub mod config;

// Infrastructure layer - metrics registry
pub mod infrastructure;

// Presentation layer - HTTP routes and middleware
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
