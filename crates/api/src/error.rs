use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use livecast_core::error::CoreError;
use livecast_db::error::StoreError;

use crate::response::ErrorResponse;

/// Message returned for every store failure. Details go to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for repository
/// failures. Implements [`IntoResponse`] to produce the
/// `{ "success": false, "error": ... }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `livecast_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A document-store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            AppError::Store(err) => {
                tracing::error!(error = %err, "Document store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, axum::Json(ErrorResponse::new(message))).into_response()
    }
}
