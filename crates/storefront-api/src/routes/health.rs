//! Health check endpoint — for load balancers, monitoring, and Docker
//! health checks.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
}

/// Health check router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}

/// Always 200 — connectivity is reported in the body, never as a failure
/// of the endpoint itself.
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let db_ok = storefront_db::postgres::health_check(&state.db.pg).await;

    Json(HealthResponse {
        status: if db_ok { "healthy" } else { "unhealthy" },
        database: if db_ok { "connected" } else { "disconnected" },
    })
}
