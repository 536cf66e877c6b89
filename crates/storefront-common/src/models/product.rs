//! Product model — the catalog entity.
//!
//! `price` is a `rust_decimal::Decimal` throughout: exact fixed-point, no
//! floating-point drift between what a client sends and what storage keeps.
//! It serializes as a decimal string ("19.99") and deserializes from either
//! a string or a JSON number.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A product row as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Database-assigned serial ID, immutable after insert.
    pub id: i32,

    pub name: String,

    pub description: Option<String>,

    /// Exact decimal price. Non-negativity is not enforced.
    pub price: Decimal,

    /// Database-assigned insertion timestamp, immutable.
    pub created_at: DateTime<Utc>,
}

/// Creation request — `id` and `created_at` are always storage-assigned,
/// so clients can never set them.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub price: Decimal,
}
