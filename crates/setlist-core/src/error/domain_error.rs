//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::SongRequestStatus;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Genre not found: {0}")]
    GenreNotFound(Uuid),

    #[error("Song not found: {0}")]
    SongNotFound(Uuid),

    #[error("Artist profile not found: {0}")]
    ArtistProfileNotFound(Uuid),

    #[error("Venue profile not found: {0}")]
    VenueProfileNotFound(Uuid),

    #[error("Repertoire not found: {0}")]
    RepertoireNotFound(Uuid),

    #[error("Event not found: {0}")]
    EventNotFound(Uuid),

    #[error("Song request not found: {0}")]
    SongRequestNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("Genre already exists")]
    GenreAlreadyExists,

    #[error("User already has an artist profile")]
    ArtistProfileAlreadyExists,

    #[error("User already has a venue profile")]
    VenueProfileAlreadyExists,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("a request for this song at this event by this user already exists")]
    DuplicateRequest,

    #[error("cannot move a song request from {from} to {to}")]
    InvalidTransition {
        from: SongRequestStatus,
        to: SongRequestStatus,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::GenreNotFound(_) => "UNKNOWN_GENRE",
            Self::SongNotFound(_) => "UNKNOWN_SONG",
            Self::ArtistProfileNotFound(_) => "UNKNOWN_ARTIST",
            Self::VenueProfileNotFound(_) => "UNKNOWN_VENUE",
            Self::RepertoireNotFound(_) => "UNKNOWN_REPERTOIRE",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::SongRequestNotFound(_) => "UNKNOWN_SONG_REQUEST",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::GenreAlreadyExists => "GENRE_ALREADY_EXISTS",
            Self::ArtistProfileAlreadyExists => "ARTIST_PROFILE_EXISTS",
            Self::VenueProfileAlreadyExists => "VENUE_PROFILE_EXISTS",

            // Business Rules
            Self::DuplicateRequest => "DUPLICATE_REQUEST",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::GenreNotFound(_)
                | Self::SongNotFound(_)
                | Self::ArtistProfileNotFound(_)
                | Self::VenueProfileNotFound(_)
                | Self::RepertoireNotFound(_)
                | Self::EventNotFound(_)
                | Self::SongRequestNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::ContentTooLong { .. })
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::UsernameAlreadyExists
                | Self::GenreAlreadyExists
                | Self::ArtistProfileAlreadyExists
                | Self::VenueProfileAlreadyExists
        )
    }

    /// Check if a request was refused by a song request rule
    pub fn is_business_rule(&self) -> bool {
        matches!(self, Self::DuplicateRequest | Self::InvalidTransition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::SongRequestNotFound(Uuid::nil());
        assert_eq!(err.code(), "UNKNOWN_SONG_REQUEST");

        assert_eq!(DomainError::DuplicateRequest.code(), "DUPLICATE_REQUEST");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::EventNotFound(Uuid::nil()).is_not_found());
        assert!(DomainError::SongNotFound(Uuid::nil()).is_not_found());
        assert!(DomainError::VenueProfileNotFound(Uuid::nil()).is_not_found());
        assert!(!DomainError::DuplicateRequest.is_not_found());
    }

    #[test]
    fn test_business_rules_are_not_conflicts() {
        assert!(DomainError::DuplicateRequest.is_business_rule());
        assert!(!DomainError::DuplicateRequest.is_conflict());
        assert!(DomainError::EmailAlreadyExists.is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidTransition {
            from: SongRequestStatus::Declined,
            to: SongRequestStatus::Played,
        };
        assert_eq!(err.to_string(), "cannot move a song request from declined to played");

        let err = DomainError::ContentTooLong { max: 500 };
        assert_eq!(err.to_string(), "Content too long: max 500 characters");
    }
}
