//! Song entity - an entry in the shared song catalog

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::traits::Entity;
use crate::value_objects::SongDifficulty;

/// Catalog song
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub genre_id: Uuid,
    /// Length as `mm:ss`
    pub duration: Option<String>,
    pub difficulty: SongDifficulty,
    /// Musical key (C, D, Em, ...)
    pub key: Option<String>,
    pub has_lyrics: bool,
    pub lyrics: Option<String>,
    pub notes: Option<String>,
    pub year: Option<i32>,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Song {
    pub fn new(id: Uuid, title: String, artist: String, genre_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            artist,
            genre_id,
            duration: None,
            difficulty: SongDifficulty::default(),
            key: None,
            has_lyrics: false,
            lyrics: None,
            notes: None,
            year: None,
            is_popular: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach lyrics, keeping `has_lyrics` consistent
    pub fn set_lyrics(&mut self, lyrics: Option<String>) {
        self.has_lyrics = lyrics.as_deref().is_some_and(|l| !l.trim().is_empty());
        self.lyrics = lyrics;
        self.updated_at = Utc::now();
    }

    /// Duration in seconds, when `duration` is well formed
    pub fn duration_seconds(&self) -> Option<u32> {
        self.duration.as_deref().and_then(parse_duration)
    }

    /// Case-insensitive substring match on title or artist
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
    }
}

/// Parse `mm:ss` into seconds. Seconds must be below 60.
pub fn parse_duration(value: &str) -> Option<u32> {
    let (minutes, seconds) = value.split_once(':')?;
    if minutes.is_empty() || seconds.len() != 2 {
        return None;
    }
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some(minutes * 60 + seconds)
}

impl Entity for Song {
    type Id = Uuid;
    const NAME: &'static str = "song";

    fn id(&self) -> Uuid {
        self.id
    }

    fn not_found(id: Uuid) -> DomainError {
        DomainError::SongNotFound(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song() -> Song {
        Song::new(
            Uuid::new_v4(),
            "Garota de Ipanema".to_string(),
            "Tom Jobim".to_string(),
            Uuid::new_v4(),
        )
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("03:45"), Some(225));
        assert_eq!(parse_duration("0:07"), Some(7));
        assert_eq!(parse_duration("12:00"), Some(720));
        assert_eq!(parse_duration("03:60"), None);
        assert_eq!(parse_duration("3:5"), None);
        assert_eq!(parse_duration(":45"), None);
        assert_eq!(parse_duration("three"), None);
    }

    #[test]
    fn test_matches_title_or_artist() {
        let song = song();
        assert!(song.matches("ipanema"));
        assert!(song.matches("jobim"));
        assert!(!song.matches("bossa"));
    }

    #[test]
    fn test_set_lyrics_tracks_flag() {
        let mut song = song();
        song.set_lyrics(Some("Olha que coisa mais linda".to_string()));
        assert!(song.has_lyrics);

        song.set_lyrics(Some("   ".to_string()));
        assert!(!song.has_lyrics);

        song.set_lyrics(None);
        assert!(!song.has_lyrics);
    }
}
