//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Vote message has no usable keyword")]
    EmptyInput,

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Keyword not found: {0}")]
    KeywordNotFound(String),

    #[error("No votes registered today")]
    NoVotesToday,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for logs and responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::KeywordNotFound(_) => "UNKNOWN_KEYWORD",
            Self::NoVotesToday => "NO_VOTES_TODAY",
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeywordNotFound(_) | Self::NoVotesToday)
    }

    /// Check if this error came from the storage backend
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }

    /// Create a storage error from any displayable cause
    pub fn storage(cause: impl std::fmt::Display) -> Self {
        Self::StorageUnavailable(cause.to_string())
    }
}
