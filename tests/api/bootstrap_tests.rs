//! Configuration loading through the process environment
//!
//! These tests exercise the same path `main` takes: `GEOAPI_CONFIG`
//! names the file, `Settings::load` resolves it (with environment
//! overrides on top), and the router factory turns the result into
//! middleware. Every test here mutates process environment variables,
//! so each holds the write side of `ENV_LOCK` through an `EnvGuard`.

use std::sync::{PoisonError, RwLockWriteGuard};

use axum::http::header;

use geoapi_server::config::{Settings, CONFIG_PATH_VAR};

use crate::{write_config, TestApp, ENV_LOCK};

/// Sets environment variables for one test and clears them again on drop.
struct EnvGuard {
    names: Vec<&'static str>,
    _lock: RwLockWriteGuard<'static, ()>,
}

impl EnvGuard {
    /// Point `GEOAPI_CONFIG` at the given path
    fn set(value: &str) -> Self {
        Self::with_vars(&[(CONFIG_PATH_VAR, value)])
    }

    /// Run with `GEOAPI_CONFIG` unset
    fn unset() -> Self {
        Self::with_vars(&[])
    }

    /// Set a group of variables. `GEOAPI_CONFIG` is always cleared first,
    /// so a test only sees the sources it declares.
    fn with_vars(vars: &[(&'static str, &str)]) -> Self {
        let lock = ENV_LOCK.write().unwrap_or_else(PoisonError::into_inner);
        std::env::remove_var(CONFIG_PATH_VAR);
        let mut names = vec![CONFIG_PATH_VAR];
        for &(name, value) in vars {
            std::env::set_var(name, value);
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Self { names, _lock: lock }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for name in &self.names {
            std::env::remove_var(name);
        }
    }
}

#[tokio::test]
async fn unset_variable_starts_with_defaults() {
    let _guard = EnvGuard::unset();

    let settings = Settings::load().expect("load should succeed without a config file");

    assert!(!settings.server.cors);
    assert!(!settings.server.gzip);
    assert_eq!(settings.server_addr(), "0.0.0.0:5000");

    let app = TestApp::from_settings(&settings);
    let response = app.get_with_origin("/health", "http://example.com").await;
    assert!(!response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn nonexistent_path_starts_with_defaults() {
    let _guard = EnvGuard::set("/definitely/not/here/config.yml");

    let settings = Settings::load().expect("load should tolerate a missing file");

    assert!(!settings.server.cors);
}

#[tokio::test]
async fn config_file_enables_cors_end_to_end() {
    let file = write_config("server:\n  cors: true\n");
    let _guard = EnvGuard::set(&file.path().to_string_lossy());

    let settings = Settings::load().expect("load should succeed");
    assert!(settings.server.cors);

    let app = TestApp::from_settings(&settings);
    let response = app.get_with_origin("/health", "http://example.com").await;
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn malformed_yaml_fails_loading() {
    let file = write_config("server:\n  cors: [true\n");
    let _guard = EnvGuard::set(&file.path().to_string_lossy());

    assert!(Settings::load().is_err());
}

#[tokio::test]
async fn nested_env_variable_enables_cors() {
    let _guard = EnvGuard::with_vars(&[("GEOAPI__SERVER__CORS", "true")]);

    let settings = Settings::load().expect("load should succeed from the environment alone");
    assert!(settings.server.cors);

    let app = TestApp::from_settings(&settings);
    let response = app.get_with_origin("/health", "http://example.com").await;
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn environment_overrides_the_config_file() {
    let file = write_config("server:\n  cors: false\n");
    let path = file.path().to_string_lossy().into_owned();
    let _guard = EnvGuard::with_vars(&[
        (CONFIG_PATH_VAR, path.as_str()),
        ("GEOAPI__SERVER__CORS", "true"),
    ]);

    let settings = Settings::load().expect("load should succeed");

    assert!(settings.server.cors);
}

#[tokio::test]
async fn host_and_port_shorthands_override_bind() {
    let _guard = EnvGuard::with_vars(&[("SERVER_HOST", "127.0.0.1"), ("SERVER_PORT", "8080")]);

    let settings = Settings::load().expect("load should succeed");

    assert_eq!(settings.server_addr(), "127.0.0.1:8080");
}
