//! HTTP server startup.

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

use crate::api;
use crate::config::ServerConfig;
use crate::registry::GameRegistry;

/// Binds the configured address and serves the API until Ctrl+C.
///
/// The registry lives exactly as long as this call.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn run(config: ServerConfig) -> Result<()> {
    let registry = GameRegistry::new();
    let app = api::router(registry.clone(), &config)?;

    let listener = TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host(), config.port()))?;
    let addr = listener.local_addr()?;

    info!(%addr, "Server ready at http://{}/", addr);
    info!(origins = ?config.allowed_origins(), "CORS origins allowed");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!(games = registry.len(), "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
