//! # GeoAPI Server
//!
//! A configuration-driven serving harness for a geospatial API.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading (optional YAML file named by `GEOAPI_CONFIG`)
//! - HTTP server with config-driven middleware

use anyhow::Result;
use tracing::info;

use geoapi_server::config::Settings;
use geoapi_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    geoapi_server::telemetry::init_tracing();

    info!("Starting GeoAPI Server...");

    // Load configuration from the optional config file and environment
    let settings = Settings::load()?;
    info!(
        host = %settings.server.bind.host,
        port = %settings.server.bind.port,
        cors = settings.server.cors,
        gzip = settings.server.gzip,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
