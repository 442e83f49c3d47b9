//! Artist profile - the performer side of a user account

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::traits::Entity;

/// Performer profile, at most one per user
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistProfile {
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

impl ArtistProfile {
    pub fn new(id: Uuid, user_id: Uuid, stage_name: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            stage_name,
            description,
            is_verified: false,
            followers: 0,
            rating: 0.0,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for ArtistProfile {
    type Id = Uuid;
    const NAME: &'static str = "artist profile";

    fn id(&self) -> Uuid {
        self.id
    }

    fn not_found(id: Uuid) -> DomainError {
        DomainError::ArtistProfileNotFound(id)
    }
}
