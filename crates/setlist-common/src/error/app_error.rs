//! Application error types
//!
//! Errors raised while wiring and running the server: configuration,
//! storage bootstrap, socket binding. Request-level failures are
//! `DomainError`s, and `domain_status` is the single place they are
//! given an HTTP status.

use std::io;
use std::net::SocketAddr;

use setlist_core::DomainError;

use crate::config::ConfigError;

/// HTTP status for a domain error
///
/// Business-rule rejections share 400 with validation failures.
#[must_use]
pub fn domain_status(err: &DomainError) -> u16 {
    if err.is_not_found() {
        404
    } else if err.is_validation() || err.is_business_rule() {
        400
    } else if err.is_conflict() {
        409
    } else {
        500
    }
}

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("DATABASE_URL is required when STORAGE_BACKEND=postgres")]
    MissingDatabase,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status(e),
            Self::StorageUnavailable(_) => 503,
            Self::Config(_)
            | Self::MissingDatabase
            | Self::Migration(_)
            | Self::InvalidAddress(_)
            | Self::Bind { .. }
            | Self::Internal(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::MissingDatabase | Self::InvalidAddress(_) => "CONFIG_ERROR",
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::Migration(_) => "MIGRATION_ERROR",
            Self::Bind { .. } | Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use setlist_core::SongRequestStatus;
    use uuid::Uuid;

    #[test]
    fn test_domain_status() {
        assert_eq!(domain_status(&DomainError::EventNotFound(Uuid::nil())), 404);
        assert_eq!(domain_status(&DomainError::DuplicateRequest), 400);
        assert_eq!(
            domain_status(&DomainError::InvalidTransition {
                from: SongRequestStatus::Played,
                to: SongRequestStatus::Pending,
            }),
            400
        );
        assert_eq!(domain_status(&DomainError::ContentTooLong { max: 500 }), 400);
        assert_eq!(domain_status(&DomainError::EmailAlreadyExists), 409);
        assert_eq!(domain_status(&DomainError::DatabaseError("x".to_string())), 500);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::StorageUnavailable("down".to_string()).status_code(), 503);
        assert_eq!(AppError::MissingDatabase.status_code(), 500);
        assert_eq!(AppError::from(DomainError::SongNotFound(Uuid::nil())).status_code(), 404);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::MissingDatabase.error_code(), "CONFIG_ERROR");
        assert_eq!(AppError::from(DomainError::DuplicateRequest).error_code(), "DUPLICATE_REQUEST");
        assert_eq!(
            AppError::Migration("checksum mismatch".to_string()).error_code(),
            "MIGRATION_ERROR"
        );
    }

    #[test]
    fn test_domain_message_passes_through() {
        let err = AppError::from(DomainError::DuplicateRequest);
        assert_eq!(
            err.to_string(),
            "a request for this song at this event by this user already exists"
        );
    }
}
