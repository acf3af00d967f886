use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use notekeeper_core::catalog::CATEGORY_EXISTS;
use notekeeper_core::error::CoreError;
use serde_json::json;

use crate::middleware::request_context::current_request_id;

/// Unique constraint on `categories.name`.
const CATEGORY_NAME_UQ: &str = "uq_categories_name";

/// Message returned in every 500 body.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `notekeeper_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message (never sent to clients).
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::DuplicateName(msg) => {
                    (StatusCode::BAD_REQUEST, "DUPLICATE_NAME", msg.clone())
                }
                CoreError::InvalidCategory(_) => {
                    (StatusCode::BAD_REQUEST, "INVALID_CATEGORY", core.to_string())
                }
                CoreError::HasDependents { .. } => {
                    (StatusCode::BAD_REQUEST, "HAS_DEPENDENTS", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => internal(msg),
        };

        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            json!({
                "error": message,
                "code": code,
                "request_id": current_request_id(),
            })
        } else {
            json!({
                "error": message,
                "code": code,
            })
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Log an internal failure with the request's correlation id and return the
/// sanitized 500 triple.
fn internal(detail: &dyn std::fmt::Display) -> (StatusCode, &'static str, String) {
    tracing::error!(
        error = %detail,
        request_id = current_request_id().as_deref().unwrap_or("-"),
        "Internal error"
    );
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// These cases are the storage-level backstop for check-then-act races that
/// slip past the service checks:
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 400.
/// - Foreign key violations map to 400.
/// - Invalid byte sequences (NUL in text) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                // PostgreSQL unique constraint violation.
                Some("23505") if constraint == CATEGORY_NAME_UQ => (
                    StatusCode::BAD_REQUEST,
                    "DUPLICATE_NAME",
                    CATEGORY_EXISTS.to_string(),
                ),
                Some("23505") if constraint.starts_with("uq_") => (
                    StatusCode::BAD_REQUEST,
                    "DUPLICATE_NAME",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                ),
                // PostgreSQL foreign key violation. Services translate the
                // ones they can attribute; this covers the rest.
                Some("23503") => (
                    StatusCode::BAD_REQUEST,
                    "FOREIGN_KEY_VIOLATION",
                    format!("Operation violates foreign key constraint: {constraint}"),
                ),
                // PostgreSQL rejects a NUL byte in text input.
                Some("22021") => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Text must not contain NUL characters".to_string(),
                ),
                _ => internal(db_err),
            }
        }
        other => internal(other),
    }
}
