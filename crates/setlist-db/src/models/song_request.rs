//! Song request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for song_requests table
#[derive(Debug, Clone, FromRow)]
pub struct SongRequestModel {
    pub id: Uuid,
    pub event_id: Uuid,
    pub song_id: Uuid,
    pub requested_by_id: Uuid,
    pub status: i16,
    pub message: Option<String>,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub played_at: Option<DateTime<Utc>>,
}
