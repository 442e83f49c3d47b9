//! Artist profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for artist_profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ArtistProfileModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub stage_name: String,
    pub description: String,
    pub is_verified: bool,
    pub followers: i32,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
