//! Song database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for songs table
#[derive(Debug, Clone, FromRow)]
pub struct SongModel {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub genre_id: Uuid,
    pub duration: Option<String>,
    pub difficulty: i16,
    pub musical_key: Option<String>,
    pub has_lyrics: bool,
    pub lyrics: Option<String>,
    pub notes: Option<String>,
    pub year: Option<i32>,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
