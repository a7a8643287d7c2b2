//! Response types and error handling for API endpoints
//!
//! Every body is plain text. Failures that reach the client are reduced to
//! two fixed messages; details stay in the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tally_common::AppError;
use tally_core::DomainError;
use tally_service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Body sent when a backing store is unreachable or timed out
pub const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable.";

/// Body sent for any other server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) if e.is_unavailable() => 503,
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(DomainError::EmptyInput) => 400,
            Self::Domain(_) => 500,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
        }
    }

    /// Plain-text body shown to the client
    #[must_use]
    pub fn body(&self) -> &'static str {
        let status = self.status_code();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            UNAVAILABLE_MESSAGE
        } else if status.is_server_error() {
            INTERNAL_ERROR_MESSAGE
        } else {
            ""
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = %self, code = self.error_code(), "Server error occurred");
        }

        (status, self.body()).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
