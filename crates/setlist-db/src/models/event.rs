//! Event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: i16,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub status: i16,
    pub visibility: i16,
    pub total_capacity: i32,
    pub created_by_id: Uuid,
    pub artist_profile_id: Option<Uuid>,
    pub venue_profile_id: Option<Uuid>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
