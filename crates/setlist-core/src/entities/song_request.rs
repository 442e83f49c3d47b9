//! SongRequest entity - one audience member asking for one song at one event

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::traits::Entity;
use crate::value_objects::SongRequestStatus;

/// Maximum length of the optional note attached to a request, in characters
pub const MAX_MESSAGE_LENGTH: usize = 500;

/// A request to hear a song at an event
///
/// At most one request exists per `(event_id, song_id, requested_by_id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRequest {
    pub id: Uuid,
    pub event_id: Uuid,
    pub song_id: Uuid,
    pub requested_by_id: Uuid,
    pub status: SongRequestStatus,
    pub message: Option<String>,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub played_at: Option<DateTime<Utc>>,
}

impl SongRequest {
    /// Create a pending request with no votes
    ///
    /// Blank messages are stored as `None`.
    pub fn new(
        id: Uuid,
        event_id: Uuid,
        song_id: Uuid,
        requested_by_id: Uuid,
        message: Option<String>,
    ) -> Result<Self, DomainError> {
        let message = message.filter(|m| !m.trim().is_empty());
        if let Some(text) = &message {
            validate_message(text)?;
        }

        let now = Utc::now();
        Ok(Self {
            id,
            event_id,
            song_id,
            requested_by_id,
            status: SongRequestStatus::Pending,
            message,
            votes: 0,
            created_at: now,
            updated_at: now,
            played_at: None,
        })
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == SongRequestStatus::Pending
    }

    /// Move to `next` if the lifecycle allows it
    ///
    /// Entering `Played` stamps `played_at`. Returns the previous status.
    pub fn transition_to(&mut self, next: SongRequestStatus) -> Result<SongRequestStatus, DomainError> {
        let from = self.status;
        if !from.can_transition_to(next) {
            return Err(DomainError::InvalidTransition { from, to: next });
        }

        let now = Utc::now();
        self.status = next;
        self.updated_at = now;
        if next == SongRequestStatus::Played {
            self.played_at = Some(now);
        }
        Ok(from)
    }
}

/// Check a request message against [`MAX_MESSAGE_LENGTH`]
pub fn validate_message(message: &str) -> Result<(), DomainError> {
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(DomainError::ContentTooLong {
            max: MAX_MESSAGE_LENGTH,
        });
    }
    Ok(())
}

impl Entity for SongRequest {
    type Id = Uuid;
    const NAME: &'static str = "song request";

    fn id(&self) -> Uuid {
        self.id
    }

    fn not_found(id: Uuid) -> DomainError {
        DomainError::SongRequestNotFound(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(message: Option<String>) -> Result<SongRequest, DomainError> {
        SongRequest::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            message,
        )
    }

    #[test]
    fn test_new_request_defaults() {
        let req = request(Some("for my mom".to_string())).unwrap();
        assert_eq!(req.status, SongRequestStatus::Pending);
        assert_eq!(req.votes, 0);
        assert!(req.played_at.is_none());
        assert_eq!(req.message.as_deref(), Some("for my mom"));
    }

    #[test]
    fn test_message_length_boundary() {
        assert!(request(Some("a".repeat(500))).is_ok());

        let err = request(Some("a".repeat(501))).unwrap_err();
        assert!(matches!(err, DomainError::ContentTooLong { max: 500 }));
    }

    #[test]
    fn test_message_length_counts_characters() {
        // 500 two-byte characters is still within the limit
        assert!(request(Some("é".repeat(500))).is_ok());
        assert!(request(Some("é".repeat(501))).is_err());
    }

    #[test]
    fn test_blank_message_dropped() {
        let req = request(Some("   ".to_string())).unwrap();
        assert!(req.message.is_none());
    }

    #[test]
    fn test_accept_then_play() {
        let mut req = request(None).unwrap();

        assert_eq!(req.transition_to(SongRequestStatus::Accepted).unwrap(), SongRequestStatus::Pending);
        assert!(req.played_at.is_none());

        assert_eq!(req.transition_to(SongRequestStatus::Played).unwrap(), SongRequestStatus::Accepted);
        assert_eq!(req.status, SongRequestStatus::Played);
        assert!(req.played_at.is_some());
    }

    #[test]
    fn test_invalid_transition_leaves_request_untouched() {
        let mut req = request(None).unwrap();
        let before = req.clone();

        let err = req.transition_to(SongRequestStatus::Played).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidTransition {
                from: SongRequestStatus::Pending,
                to: SongRequestStatus::Played
            }
        ));
        assert_eq!(req, before);
    }

    #[test]
    fn test_declined_is_final() {
        let mut req = request(None).unwrap();
        req.transition_to(SongRequestStatus::Declined).unwrap();

        assert!(req.transition_to(SongRequestStatus::Accepted).is_err());
        assert!(req.transition_to(SongRequestStatus::Pending).is_err());
    }
}
