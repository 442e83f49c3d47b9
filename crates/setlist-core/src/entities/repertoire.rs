//! Repertoire entity - an artist's ordered list of songs

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::traits::Entity;

/// Ordered song list owned by an artist profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repertoire {
    pub id: Uuid,
    pub artist_profile_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    /// Songs in performance order; no duplicates
    pub song_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Repertoire {
    pub fn new(id: Uuid, artist_profile_id: Uuid, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            artist_profile_id,
            name,
            description: None,
            is_active: false,
            song_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn contains(&self, song_id: Uuid) -> bool {
        self.song_ids.contains(&song_id)
    }

    /// Append songs that are not already present, in the given order
    ///
    /// Returns the songs actually appended.
    pub fn append_songs(&mut self, song_ids: &[Uuid]) -> Vec<Uuid> {
        let mut added = Vec::new();
        for id in song_ids {
            if !self.contains(*id) {
                self.song_ids.push(*id);
                added.push(*id);
            }
        }
        if !added.is_empty() {
            self.updated_at = Utc::now();
        }
        added
    }

    /// Remove a song, returning whether it was present
    pub fn remove_song(&mut self, song_id: Uuid) -> bool {
        let before = self.song_ids.len();
        self.song_ids.retain(|id| *id != song_id);
        let removed = self.song_ids.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }
}

impl Entity for Repertoire {
    type Id = Uuid;
    const NAME: &'static str = "repertoire";

    fn id(&self) -> Uuid {
        self.id
    }

    fn not_found(id: Uuid) -> DomainError {
        DomainError::RepertoireNotFound(id)
    }
}
