// sitesnap service binary.
//
// Serves the scrape and screenshot endpoints over HTTP. Listen port comes
// from the PORT env var, defaulting to 3000.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sitesnap::server;
use sitesnap::utils::constants::DEFAULT_PORT;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("sitesnap service listening on port {port}");

    axum::serve(listener, server::router())
        .await
        .context("Server error")?;

    Ok(())
}
