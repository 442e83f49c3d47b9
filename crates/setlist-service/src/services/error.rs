//! Service layer error type

use std::fmt;

use setlist_common::domain_status;
use setlist_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Raised by an entity or a repository
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Lookup miss for a key that is not an entity id (an email, a repertoire slot)
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(resource: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The domain rule that refused a song request operation, if any
    pub fn business_rule(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) if e.is_business_rule() => Some(e),
            _ => None,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status(e),
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
        }
    }

    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use setlist_core::SongRequestStatus;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::not_found("User", "ana@example.com");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "User not found: ana@example.com");
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("query must not be blank");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.business_rule().is_none());
    }

    #[test]
    fn test_business_rules() {
        let duplicate = ServiceError::from(DomainError::DuplicateRequest);
        assert!(duplicate.business_rule().is_some());
        assert_eq!(duplicate.status_code(), 400);

        let transition = ServiceError::from(DomainError::InvalidTransition {
            from: SongRequestStatus::Declined,
            to: SongRequestStatus::Played,
        });
        assert_eq!(transition.error_code(), "INVALID_TRANSITION");
        assert_eq!(
            transition.to_string(),
            "cannot move a song request from declined to played"
        );

        let missing = ServiceError::from(DomainError::EventNotFound(Uuid::nil()));
        assert!(missing.business_rule().is_none());
        assert_eq!(missing.status_code(), 404);
    }
}
