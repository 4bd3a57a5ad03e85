//! Web error types for the transfer-desk web server.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::form::FormError;
use crate::session::SessionError;

/// Error type for web API operations.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request with validation error.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Conflict error (e.g., session limit reached).
    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match &self {
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", Some(msg.clone())),
            WebError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad Request", Some(msg.clone()))
            }
            WebError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    Some(msg.clone()),
                )
            }
            WebError::Conflict(msg) => (StatusCode::CONFLICT, "Conflict", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

impl From<FormError> for WebError {
    fn from(err: FormError) -> Self {
        WebError::BadRequest(err.to_string())
    }
}

impl From<SessionError> for WebError {
    fn from(err: SessionError) -> Self {
        let message = err.to_string();
        match err {
            SessionError::NotFound(_) => WebError::NotFound(message),
            SessionError::LimitReached(_) => WebError::Conflict(message),
            SessionError::Form(e) => e.into(),
            SessionError::Export(_) => WebError::Internal(message),
        }
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        WebError::BadRequest(rejection.body_text())
    }
}
