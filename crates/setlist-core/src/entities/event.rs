//! Event entity - a show where the audience can request songs

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::traits::Entity;
use crate::value_objects::{EventCategory, EventStatus, EventVisibility};

/// Scheduled event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub status: EventStatus,
    pub visibility: EventVisibility,
    pub total_capacity: i32,
    pub created_by_id: Uuid,
    pub artist_profile_id: Option<Uuid>,
    pub venue_profile_id: Option<Uuid>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a draft event
    pub fn new(
        id: Uuid,
        title: String,
        category: EventCategory,
        starts_at: DateTime<Utc>,
        created_by_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description: String::new(),
            category,
            starts_at,
            ends_at: None,
            status: EventStatus::Draft,
            visibility: EventVisibility::Public,
            total_capacity: 0,
            created_by_id,
            artist_profile_id: None,
            venue_profile_id: None,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the end time. It must be strictly after the start.
    pub fn set_ends_at(&mut self, ends_at: Option<DateTime<Utc>>) -> Result<(), DomainError> {
        if let Some(end) = ends_at {
            if end <= self.starts_at {
                return Err(DomainError::ValidationError(
                    "event must end after it starts".to_string(),
                ));
            }
        }
        self.ends_at = ends_at;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Mark the event as published
    pub fn publish(&mut self) {
        let now = Utc::now();
        self.status = EventStatus::Published;
        self.published_at.get_or_insert(now);
        self.updated_at = now;
    }

    /// Published and not yet started at `now`
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.status == EventStatus::Published && self.starts_at >= now
    }
}

impl Entity for Event {
    type Id = Uuid;
    const NAME: &'static str = "event";

    fn id(&self) -> Uuid {
        self.id
    }

    fn not_found(id: Uuid) -> DomainError {
        DomainError::EventNotFound(id)
    }
}
