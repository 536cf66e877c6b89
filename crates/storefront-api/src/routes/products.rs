//! Product routes — list, get, create, delete.
//!
//! GET    /products       — List all products, newest first
//! GET    /products/{id}  — Get a product by ID
//! POST   /products       — Create a product
//! DELETE /products/{id}  — Delete a product by ID
//!
//! Malformed bodies and non-integer path ids are rejected with 422 before
//! any repository call; absence from the repository becomes 404.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use storefront_common::{
    error::{ApiError, ApiResult},
    models::{CreateProductRequest, Product},
    validation::validate_request,
};
use storefront_db::repository::products;

use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product).delete(delete_product))
}

#[derive(Serialize)]
struct DeleteResponse {
    message: &'static str,
}

/// Promote an extractor rejection to a 422 validation error.
fn unprocessable(body_text: String) -> ApiError {
    ApiError::Validation { message: body_text }
}

// ============================================================
// GET /products
// ============================================================

async fn list_products(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Product>>> {
    let all = products::list_products(&state.db.pg).await?;
    Ok(Json(all))
}

// ============================================================
// GET /products/{id}
// ============================================================

async fn get_product(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id.map_err(|e| unprocessable(e.body_text()))?;

    match products::find_by_id(&state.db.pg, id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::NotFound {
            resource: "Product".into(),
        }),
    }
}

// ============================================================
// POST /products
// ============================================================

async fn create_product(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Json(req) = body.map_err(|e| unprocessable(e.body_text()))?;
    validate_request(&req)?;

    let created = products::create_product(&state.db.pg, &req).await?;
    Ok(Json(created))
}

// ============================================================
// DELETE /products/{id}
// ============================================================

async fn delete_product(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(id) = id.map_err(|e| unprocessable(e.body_text()))?;

    if products::delete_product(&state.db.pg, id).await? {
        Ok(Json(DeleteResponse {
            message: "Product deleted successfully",
        }))
    } else {
        Err(ApiError::NotFound {
            resource: "Product".into(),
        })
    }
}
