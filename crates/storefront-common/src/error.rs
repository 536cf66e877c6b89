//! Centralized error types for Storefront.
//!
//! Uses `thiserror` for ergonomic error definitions and provides HTTP-friendly
//! error variants that can be directly converted to API responses. The routing
//! layer never matches on errors itself — this module is the sole translator
//! from the error taxonomy to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Core application error type used across all Storefront crates.
///
/// Absence of a row is NOT an error at the repository level — repositories
/// return `Option` / `bool` sentinels and route handlers promote those to
/// [`ApiError::NotFound`]. Everything else propagates through `?`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // === Resource errors ===
    #[error("{resource} not found")]
    NotFound { resource: String },

    // === Validation errors ===
    #[error("Validation failed: {message}")]
    Validation { message: String },

    // === Infrastructure errors ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// JSON error response body sent to clients.
#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    error: String,
    message: String,
}

impl ApiError {
    /// Map error to HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error code string for programmatic handling by clients.
    pub fn error_code(&self) -> &str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Don't leak internal details to clients
        let message = match &self {
            ApiError::Database(e) => {
                tracing::error!("Database error: {e}");
                "An internal error occurred".to_string()
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {e}");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            code: status.as_u16(),
            error: self.error_code().to_string(),
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}
