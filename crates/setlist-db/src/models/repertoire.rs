//! Repertoire database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for repertoires table
#[derive(Debug, Clone, FromRow)]
pub struct RepertoireModel {
    pub id: Uuid,
    pub artist_profile_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for repertoire_songs join table
#[derive(Debug, Clone, FromRow)]
pub struct RepertoireSongModel {
    pub repertoire_id: Uuid,
    pub song_id: Uuid,
    pub position: i32,
}
