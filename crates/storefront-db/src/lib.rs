//! # storefront-db
//!
//! Database layer for Storefront. Owns the PostgreSQL connection pool and
//! the products repository. The pool is an explicitly constructed handle —
//! it is threaded into the routing layer through `AppState`, never ambient
//! global state. No other crate opens connections.

pub mod postgres;
pub mod repository;

use anyhow::Result;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use storefront_common::config::DatabaseConfig;

/// Shared database state passed through Axum extractors.
#[derive(Clone)]
pub struct Database {
    pub pg: PgPool,
}

impl Database {
    /// Open the connection pool.
    ///
    /// The connection URL is assembled from config once, here; values are
    /// not re-read afterward. The pool keeps at least `min_connections`
    /// idle and caps concurrent in-use connections at `max_connections`;
    /// callers past the cap suspend until a connection frees up.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.name,
            "Connecting to PostgreSQL..."
        );
        let pg = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .connect(&config.url())
            .await?;
        tracing::info!("Connected to PostgreSQL");

        Ok(Self { pg })
    }

    /// Open the pool without establishing any connection up front.
    ///
    /// Connections are opened on first use. Used where eager connectivity
    /// is not wanted, e.g. router tests against an unreachable database.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self> {
        let pg = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .connect_lazy(&config.url())?;
        Ok(Self { pg })
    }

    /// Release all pooled connections. Idempotent — closing an already
    /// closed pool is a no-op. Operations on a closed pool surface as
    /// `sqlx::Error::PoolClosed`.
    pub async fn close(&self) {
        self.pg.close().await;
        tracing::info!("Database pool closed");
    }
}
