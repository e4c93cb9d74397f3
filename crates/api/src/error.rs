use awe_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "error", "data", "message" }`
/// JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `awe_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Status plus the three fields of the JSON error body.
type ErrorParts = (StatusCode, &'static str, String, String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, data, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => classify_core_error(core),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Rendering / internal ---
            AppError::Template(err) => {
                tracing::error!(error = %err, "Template render error");
                internal()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": error,
            "data": data,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> ErrorParts {
    match err {
        CoreError::Validation { field, message } => (
            StatusCode::BAD_REQUEST,
            "value:invalid",
            (*field).to_string(),
            message.clone(),
        ),
        CoreError::NotFound { entity, .. } => (
            StatusCode::NOT_FOUND,
            "value:notfound",
            (*entity).to_string(),
            format!("{entity} not found"),
        ),
        CoreError::Forbidden(msg) => (
            StatusCode::FORBIDDEN,
            "permission:forbidden",
            "permission".to_string(),
            msg.clone(),
        ),
        CoreError::Conflict {
            code,
            field,
            message,
        } => (
            StatusCode::CONFLICT,
            *code,
            (*field).to_string(),
            message.clone(),
        ),
    }
}

/// Classify a sqlx error into an HTTP status and error body fields.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> ErrorParts {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "value:notfound",
            String::new(),
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "value:conflict",
                        constraint.to_string(),
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

fn internal() -> ErrorParts {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal:error",
        String::new(),
        "An internal error occurred".to_string(),
    )
}
