//! HTTP server setup and serve loop.
//!
//! # Responsibilities
//! - Build the Axum router around the attached webapp routes
//! - Expose the merged configuration to handlers via shared state
//! - Wire up middleware (request tracing, timeout)
//! - Serve on the bound listener until interrupted

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Configuration;

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Configuration>,
}

/// The jino web application: the merged configuration plus the assembled
/// router. Constructed once, after the configuration is fully assembled.
pub struct HttpServer {
    router: Router,
    config: Configuration,
}

impl HttpServer {
    /// Create the application from the merged configuration and the webapp
    /// routes supplied by the surrounding codebase.
    pub fn new(config: Configuration, webapp: Router<AppState>) -> Self {
        let state = AppState {
            config: Arc::new(config.clone()),
        };
        let router = Self::build_router(webapp, state);
        Self { router, config }
    }

    /// Build the Axum router with the middleware layers.
    fn build_router(webapp: Router<AppState>, state: AppState) -> Router {
        webapp
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
            .layer(TraceLayer::new_for_http())
    }

    /// The `host:port` this server wants to listen on, with defaults applied.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.config.bind_host(), self.config.port())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Run the server, accepting connections on the given listener. Blocks
    /// until the process receives an interrupt.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Running jino web server");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
