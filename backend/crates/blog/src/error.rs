//! API Error Types
//!
//! This module provides the blog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// API error variants
///
/// Session-cookie decode failures are deliberately not represented here:
/// they degrade to an anonymous identity instead of surfacing.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client supplied a malformed or missing field
    #[error("{field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    /// Request conflicts with existing state (e.g. duplicate email)
    #[error("{field}: {message}")]
    Conflict {
        field: &'static str,
        message: String,
    },

    /// Identity missing or insufficient privilege
    #[error("Permission denied")]
    PermissionDenied,

    /// Referenced entity absent
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::InvalidField {
            field,
            message: message.into(),
        }
    }

    pub fn conflict(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::Conflict {
            field,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::PermissionDenied => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::InvalidField { .. } => ErrorKind::BadRequest,
            ApiError::Conflict { .. } => ErrorKind::Conflict,
            ApiError::PermissionDenied => ErrorKind::Forbidden,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::Database(_) | ApiError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "Database error");
            }
            ApiError::Internal(msg) => {
                tracing::error!(message = %msg, "Internal error");
            }
            ApiError::PermissionDenied => {
                tracing::warn!("Permission denied");
            }
            _ => {
                tracing::debug!(error = %self, "API error");
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
