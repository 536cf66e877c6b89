//! PostgreSQL setup and connection helpers.

use sqlx::PgPool;

/// Health check — verify the database is reachable.
///
/// Never returns an error: every failure (connectivity, timeout, auth) is
/// logged and reported as `false`. The health endpoint's whole purpose is
/// to never itself fail.
pub async fn health_check(pool: &PgPool) -> bool {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Database health check failed: {e}");
            false
        }
    }
}
