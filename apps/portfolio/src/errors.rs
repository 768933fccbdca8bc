use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::content::ContentError;

/// Application-level error type for the content host.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Content unavailable: {0}")]
    ContentUnavailable(ContentError),
}

impl From<ContentError> for AppError {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                AppError::NotFound("Projects document does not exist".to_string())
            }
            other => AppError::ContentUnavailable(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::ContentUnavailable(e) => {
                tracing::error!("Content error: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "CONTENT_UNAVAILABLE",
                    "Portfolio content could not be loaded".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
