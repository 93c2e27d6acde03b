//! Error handling module
//!
//! Defines the error taxonomy of the advisory endpoint. Display output is the
//! wire-level error message, so variants carry their text verbatim.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorBody;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Query arrived without a usable prompt
    #[error("Missing prompt")]
    MissingPrompt,

    /// Upstream chat API answered with a non-success status
    #[error("{0}")]
    Upstream(String),

    /// Anything else that went wrong while answering
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Upstream failure relaying the upstream's own body text.
    ///
    /// An empty body substitutes "LLM error"; whitespace-only bodies are
    /// relayed as received.
    pub fn upstream(body: impl Into<String>) -> Self {
        let body = body.into();
        if body.is_empty() {
            AppError::Upstream("LLM error".to_string())
        } else {
            AppError::Upstream(body)
        }
    }

    /// Internal failure with a guaranteed non-empty message
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            AppError::Internal("Unexpected error".to_string())
        } else {
            AppError::Internal(message)
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingPrompt => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::internal(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::internal(err.to_string())
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Client error: {} - Status code: {}", self, status);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
