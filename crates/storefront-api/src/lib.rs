//! # storefront-api
//!
//! REST API layer for Storefront. Maps HTTP verbs and paths under `/api`
//! to data-access calls, validates request shapes, and translates absence
//! into 404. The database handle arrives by constructor injection through
//! [`AppState`] — handlers never reach for ambient state.

pub mod routes;

use axum::Router;
use axum::http::Method;
use std::sync::Arc;
use storefront_db::Database;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Shared application state available to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(routes::health::router())
        .merge(routes::products::router());

    // All origins with credentials: tower-http forbids the wildcard in
    // that combination, so the request's origin and headers are mirrored.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
