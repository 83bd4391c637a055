//! # Receipt Rewards API
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rewards API Server                               │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► ReceiptService ───► ReceiptRegistry      │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                                rewards_core::score                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use rewards_api::{build_router, telemetry, AppState, RewardsConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = RewardsConfig::load()?;
    telemetry::init(&config.log_filter);

    info!(
        host = %config.host,
        port = config.port,
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    let bind_addr = config.bind_address();
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    info!(addr = %bind_addr, "Rewards API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
