//! HTTP error handling and response conversion.
//!
//! Errors are mapped to HTTP status codes and a `{"error": message}` JSON body. The
//! message is user-safe; the full error is logged at a level matching the status.

use crate::domain::shared::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Request validation failed (400).
    BadRequest(String),

    /// Database operation failed (500).
    Database(String),

    /// Upstream could not be reached (503).
    ExternalService(String),

    /// Upstream answered with an error (502).
    BadGateway(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Database(msg) => write!(f, "Database error: {}", msg),
            Self::ExternalService(msg) => write!(f, "External service error: {}", msg),
            Self::BadGateway(msg) => write!(f, "Bad gateway: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ExternalService(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Resource not found".into(),
            Self::BadRequest(msg) => msg.clone(),
            Self::Database(_) => "Database operation failed".into(),
            Self::ExternalService(_) => "External service unavailable".into(),
            Self::BadGateway(_) => "External service returned an error".into(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::BAD_GATEWAY => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidArgument(msg) => AppError::BadRequest(msg),
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::UpstreamUnavailable(msg) => AppError::ExternalService(msg),
            e @ DomainError::UpstreamRejected { .. } => AppError::BadGateway(e.to_string()),
            DomainError::StorageFault(msg) => {
                tracing::error!(storage_fault = %msg);
                AppError::Database(msg)
            }
            // Absorbed by the search use case; reaching here is a wiring bug.
            DomainError::TranslationFailed(msg) => AppError::Internal(msg),
        }
    }
}
