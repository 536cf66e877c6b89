//! # Storefront Server
//!
//! Main binary: loads configuration, opens the database pool, serves the
//! REST API, and closes the pool after the listener stops accepting
//! requests. Startup and shutdown each run to completion around the
//! serving window.

use std::net::SocketAddr;
use storefront_api::{AppState, build_router};
use storefront_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = storefront_common::config::load()?;

    // Initialize tracing (structured logging)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=debug,tower_http=debug".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting Storefront v{}", env!("CARGO_PKG_VERSION"));

    // Open the connection pool (min 1, max 10) before accepting requests
    let db = Database::connect(&config.database).await?;

    let state = AppState { db: db.clone() };
    let router = build_router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    tracing::info!("REST API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release pooled connections once no requests are in flight
    db.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
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

    tracing::info!("Shutdown signal received");
}
