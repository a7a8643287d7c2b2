//! Error handling utilities for stores

use sqlx::Error as SqlxError;
use tally_core::DomainError;

/// Convert SQLx error to DomainError
///
/// Every database failure reaches callers as an unavailable backend; the
/// detail is kept for logs.
pub fn map_db_error(e: SqlxError) -> DomainError {
    tracing::error!(error = %e, "Database operation failed");
    DomainError::StorageUnavailable(e.to_string())
}
