//! Main entry point for the marketplace backend.
//!
//! This file loads configuration, initializes logging and the database pool,
//! and serves the Axum router until Ctrl-C.

use anyhow::Context;
use marketplace_backend::{database, router, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("marketplace_backend=info".parse()?),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;
    let pool = database::connect(&config.database_url)
        .await
        .with_context(|| format!("opening database {}", config.database_url))?;

    let app = router(AppState::new(pool, &config));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("Backend running on port {}", addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
