//! Sizer Server - HTTP host for the Kubernetes capacity sizing engine
//!
//! Exposes the calculation entry point, catalog listings, health probes,
//! and Prometheus metrics over a small axum API.

use anyhow::Result;
use sizer_lib::StaticCatalog;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod observability;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!("Starting sizer-server");

    let config = config::ServerConfig::load()?;
    info!(port = config.port, "Server configured");

    let catalog = Arc::new(StaticCatalog::builtin());
    let metrics = observability::ServerMetrics::new();
    let app_state = Arc::new(api::AppState::new(catalog, metrics));

    let api_handle = tokio::spawn(api::serve(config.port, app_state));

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    api_handle.abort();

    Ok(())
}
