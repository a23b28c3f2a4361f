use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::store::StoreError;

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    NotFound(String),
    BadRequest(String),
    /// Body could not be extracted; carries the status to answer with.
    Rejected(StatusCode, String),
    Internal(String),
}

impl AppError {
    /// Store failure on a create/update path.
    pub fn write(err: StoreError) -> Self {
        tracing::error!("Store write failed: {err}");
        AppError::BadRequest(err.to_string())
    }

    /// Store failure on a list/delete path.
    pub fn read(err: StoreError) -> Self {
        tracing::error!("Store read failed: {err}");
        AppError::Internal(err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Rejected(status, msg) => write!(f, "Rejected ({status}): {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected submission: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::warn!("{msg}");
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Rejected(status, msg) => (status, msg),
            // Store messages are passed through to the caller.
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}
