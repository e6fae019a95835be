//! Application error type and its HTTP representation.
//!
//! Every client-facing failure is rendered as `{"error": "..."}`. Validation and
//! DNS failures share one message so clients cannot tell them apart; the cause is
//! only visible in the logs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// Body returned for a URL that fails the format or host check.
pub const INVALID_URL_MESSAGE: &str = "invalid URL";

/// Body returned when a short code does not resolve.
pub const NOT_FOUND_MESSAGE: &str = "No short URL found for given input";

/// Body returned when the store fails while creating a mapping.
pub const STORAGE_FAILURE_MESSAGE: &str = "failed to save short URL";

/// JSON error body shared by all endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Submitted string is not a well-formed `http(s)://` URL.
    #[error("invalid URL format: {0}")]
    Validation(String),

    /// Host segment of the URL did not resolve.
    #[error("host `{host}` could not be resolved: {reason}")]
    UnresolvableHost { host: String, reason: String },

    /// No mapping exists for the requested short code.
    #[error("no short URL found for `{0}`")]
    NotFound(String),

    /// A unique constraint rejected the write.
    #[error("duplicate key violates constraint {constraint:?}")]
    DuplicateKey { constraint: Option<String> },

    /// Persistence layer unreachable or the statement failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn unresolvable_host(host: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnresolvableHost {
            host: host.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(short_code: impl Into<String>) -> Self {
        Self::NotFound(short_code.into())
    }

    pub fn storage(reason: impl Into<String>) -> Self {
        Self::Storage(reason.into())
    }

    /// Returns true for failures of the persistence layer.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::DuplicateKey { .. })
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::DuplicateKey {
                constraint: db.constraint().map(str::to_string),
            };
        }

        AppError::Storage(e.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(reason) => {
                tracing::info!(%reason, "Rejected URL: bad format");
                (StatusCode::OK, INVALID_URL_MESSAGE)
            }
            AppError::UnresolvableHost { host, reason } => {
                tracing::info!(%host, %reason, "Rejected URL: host lookup failed");
                (StatusCode::OK, INVALID_URL_MESSAGE)
            }
            AppError::NotFound(code) => {
                tracing::info!(%code, "Short URL not found");
                (StatusCode::OK, NOT_FOUND_MESSAGE)
            }
            AppError::DuplicateKey { .. } | AppError::Storage(_) => {
                tracing::error!(error = %self, "Storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, STORAGE_FAILURE_MESSAGE)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
