use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cosmos_core::error::CoreError;
use serde_json::json;

/// The only reason ever shown to clients for a rejected write.
pub const VALIDATION_ERRORS: &str = "validation errors";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and separates store failures on
/// reads from store failures on writes. Implements [`IntoResponse`] to
/// produce the service's JSON error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cosmos_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store error while reading. Answered as a sanitized 500.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store refused a write (constraint violation, lost connection).
    ///
    /// Answered exactly like a validation failure; the cause is only logged.
    #[error("Write rejected by store: {0}")]
    Rejected(#[source] sqlx::Error),

    /// A path id too large for any row to carry. Answered like a missing row.
    #[error("{entity} id out of range")]
    IdOutOfRange { entity: &'static str },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for a missing entity.
    pub fn not_found(entity: &'static str, id: cosmos_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({ "error": format!("{entity} not found") }),
                )
            }
            AppError::IdOutOfRange { entity } => {
                tracing::debug!(entity, "Path id out of range");
                (
                    StatusCode::NOT_FOUND,
                    json!({ "error": format!("{entity} not found") }),
                )
            }
            AppError::Core(CoreError::Validation(msg)) => {
                tracing::debug!(reason = %msg, "Validation failed");
                (StatusCode::BAD_REQUEST, json!({ "errors": [VALIDATION_ERRORS] }))
            }
            AppError::Rejected(err) => {
                tracing::warn!(error = %err, "Store rejected write");
                (StatusCode::BAD_REQUEST, json!({ "errors": [VALIDATION_ERRORS] }))
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal error occurred" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
