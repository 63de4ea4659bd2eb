//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - A YAML file named by the `GEOAPI_CONFIG` environment variable
//! - Environment variables (prefixed with `GEOAPI__`)
//! - .env files (via dotenvy)
//!
//! An unset `GEOAPI_CONFIG`, or one pointing at a path that does not exist,
//! is not an error: the server starts with the documented defaults and all
//! optional middleware disabled. A file that exists but fails to parse is a
//! fatal startup error.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use geoapi_server::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Server will listen on {}", settings.server_addr());
//! ```

mod settings;

pub use settings::*;
