//! Products repository — CRUD over the `products` table.
//!
//! Absence is a sentinel (`None` / `false`), never an error; only
//! infrastructure failures propagate as `sqlx::Error`. Each call acquires a
//! pooled connection for the duration of its single statement and releases
//! it on every exit path.

use sqlx::PgPool;
use storefront_common::models::{CreateProductRequest, Product};

// ============================================================
// Read
// ============================================================

/// Get all products, newest first. An empty table yields an empty vec.
pub async fn list_products(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Get a single product by ID.
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

// ============================================================
// Create
// ============================================================

/// Insert a new product. Storage assigns `id` and `created_at`; the fully
/// populated row is returned.
pub async fn create_product(
    pool: &PgPool,
    req: &CreateProductRequest,
) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, description, price) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&req.name)
    .bind(req.description.as_deref())
    .bind(req.price)
    .fetch_one(pool)
    .await
}

// ============================================================
// Delete
// ============================================================

/// Delete a product by ID. Returns `true` if a row was removed, `false` if
/// the id did not exist. Decided via the affected-row count, not driver
/// status-string parsing.
pub async fn delete_product(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    match result.rows_affected() {
        0 => Ok(false),
        1 => Ok(true),
        n => {
            // Unreachable with a unique primary key; the rows are gone
            // either way, so report success.
            tracing::warn!("delete_product({id}) removed {n} rows, expected at most 1");
            Ok(true)
        }
    }
}
