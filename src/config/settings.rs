//! Application settings and configuration structures.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Environment variable naming the optional YAML configuration file.
pub const CONFIG_PATH_VAR: &str = "GEOAPI_CONFIG";

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (bind address, advertised URL, middleware flags)
    pub server: ServerSettings,

    /// Service metadata served on the landing page
    pub metadata: MetadataSettings,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Socket binding (host, port)
    pub bind: BindSettings,

    /// Advertised base URL used when building links (e.g. behind a proxy)
    pub url: String,

    /// Enable permissive cross-origin resource sharing. Defaults to `false`;
    /// when true, every response carries the middleware's default permissive
    /// CORS headers. Truthy scalars (`1`, `"true"`, `on`) are accepted.
    pub cors: bool,

    /// Enable gzip response compression. Defaults to `false`.
    pub gzip: bool,
}

/// Socket binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BindSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// Service metadata, surfaced by the landing document.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataSettings {
    /// Human-readable service title
    pub title: String,

    /// One-line service description
    pub description: String,
}

impl Settings {
    /// Load settings from the optional config file and environment variables.
    ///
    /// The loading order is:
    /// 1. Built-in defaults (lowest priority)
    /// 2. The YAML file named by `GEOAPI_CONFIG`, when that path exists
    /// 3. Environment variables (highest priority)
    ///
    /// An unset `GEOAPI_CONFIG` or a nonexistent path falls back to the
    /// defaults; it is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed,
    /// or if the resolved settings fail validation. The caller is expected to
    /// abort startup rather than continue on a partially loaded config.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let config_path = std::env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from);
        Self::from_path(config_path.as_deref())
    }

    /// Load settings from an explicit config file path.
    ///
    /// `None`, or a path that does not exist, yields the defaults (with
    /// environment overrides still applied). This is the testable core of
    /// [`Settings::load`].
    pub fn from_path(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with default values
            .set_default("server.bind.host", "0.0.0.0")?
            .set_default("server.bind.port", 5000)?
            .set_default("server.url", "http://localhost:5000")?
            .set_default("server.cors", false)?
            .set_default("server.gzip", false)?
            .set_default("metadata.title", "geoapi-server instance")?
            .set_default(
                "metadata.description",
                "Geospatial API served by geoapi-server",
            )?;

        match path {
            Some(path) if path.exists() => {
                // The file is parsed as YAML regardless of its extension;
                // parse failures propagate and abort startup.
                builder = builder
                    .add_source(File::from(path).format(FileFormat::Yaml).required(true));
            }
            Some(path) => {
                // A dangling path means the feature set stays at defaults.
                tracing::warn!(
                    path = %path.display(),
                    "config file not found, starting with defaults"
                );
            }
            None => {}
        }

        builder
            // Load from environment variables
            // GEOAPI__SERVER__CORS=true -> server.cors = true
            .add_source(
                Environment::default()
                    .prefix("GEOAPI")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.bind.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.bind.port", std::env::var("SERVER_PORT").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.validate()?;
                Ok(settings)
            })
    }

    /// Get the full server bind address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.bind.host, self.server.bind.port)
    }

    /// Check resolved values that the type system cannot.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.host.is_empty() {
            return Err(ConfigError::Message(
                "server.bind.host must not be empty".into(),
            ));
        }
        if self.server.bind.port == 0 {
            return Err(ConfigError::Message(
                "server.bind.port must be greater than 0".into(),
            ));
        }
        if self.server.url.is_empty() {
            return Err(ConfigError::Message("server.url must not be empty".into()));
        }
        Ok(())
    }
}
