//! Application Startup
//!
//! Turns [`Settings`](crate::config::Settings) into a runnable server.
//! [`build_router`] is the single place where configuration becomes
//! middleware, so tests can drive the exact router that production
//! serves without binding a socket.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::Settings;
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{apply_compression, apply_cors, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

/// Build the service router for the given settings.
///
/// Layer order matters: CORS sits outermost so preflight requests are
/// answered before anything else runs, compression wraps the traced
/// routes so response sizes are logged post-compression.
pub fn build_router(settings: &Settings) -> Router {
    let state = AppState {
        settings: Arc::new(settings.clone()),
    };

    let router = routes::create_router(state).layer(create_trace_layer());
    let router = apply_compression(router, settings.server.gzip);
    apply_cors(router, settings.server.cors)
}

/// A built application, bound to its listener but not yet serving
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Bind the listener and assemble the router.
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let router = build_router(&settings);

        let addr = settings.server_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Address the listener is bound to
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve requests until SIGINT or SIGTERM arrives.
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

/// Completes when the process receives a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
