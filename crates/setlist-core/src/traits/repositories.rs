//! Repository traits (ports) - entity-specific capabilities on top of [`Store`]
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::store::{RepoResult, Store};
use crate::entities::{
    ArtistProfile, Event, Genre, Repertoire, Song, SongRequest, User, VenueProfile,
};
use crate::value_objects::SongRequestStatus;

/// Offset pagination for catalog listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: i64,
    pub limit: i64,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;

    /// Build from a 1-based page number, clamping the size to `1..=MAX_LIMIT`
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let limit = page_size.clamp(1, Self::MAX_LIMIT);
        let page = page.max(1);
        Self {
            offset: (page - 1).saturating_mul(limit),
            limit,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Store<User> {
    /// Find user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by username (case-insensitive)
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;
}

// ============================================================================
// Genre Repository
// ============================================================================

#[async_trait]
pub trait GenreRepository: Store<Genre> {
    /// Find genre by name (case-insensitive)
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Genre>>;

    /// List every genre ordered by name
    async fn list_all(&self) -> RepoResult<Vec<Genre>>;
}

// ============================================================================
// Song Repository
// ============================================================================

#[async_trait]
pub trait SongRepository: Store<Song> {
    /// Songs of a genre, ordered by title
    async fn list_by_genre(&self, genre_id: Uuid, page: PageRequest) -> RepoResult<Vec<Song>>;

    /// Case-insensitive substring search over title, artist and genre name,
    /// ordered by title
    async fn search(&self, query: &str, page: PageRequest) -> RepoResult<Vec<Song>>;

    /// Songs flagged popular, ordered by title
    async fn list_popular(&self, limit: i64) -> RepoResult<Vec<Song>>;
}

// ============================================================================
// Artist Profile Repository
// ============================================================================

#[async_trait]
pub trait ArtistProfileRepository: Store<ArtistProfile> {
    /// Find the profile owned by a user
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<ArtistProfile>>;
}

// ============================================================================
// Venue Profile Repository
// ============================================================================

#[async_trait]
pub trait VenueProfileRepository: Store<VenueProfile> {
    /// Find the profile owned by a user
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<VenueProfile>>;

    /// Venues whose address is in `city` (case-insensitive), best rated first
    async fn list_by_city(&self, city: &str) -> RepoResult<Vec<VenueProfile>>;
}

// ============================================================================
// Repertoire Repository
// ============================================================================

/// `Store::update` persists the scalar fields only; the song list changes
/// through [`RepertoireRepository::append_songs`] and
/// [`RepertoireRepository::remove_song`].
#[async_trait]
pub trait RepertoireRepository: Store<Repertoire> {
    /// Repertoires of an artist, newest first
    async fn list_by_artist(&self, artist_profile_id: Uuid, active_only: bool)
        -> RepoResult<Vec<Repertoire>>;

    /// Append songs not already present; returns the ones added
    async fn append_songs(&self, repertoire_id: Uuid, song_ids: &[Uuid]) -> RepoResult<Vec<Uuid>>;

    /// Remove a song; returns whether it was present
    async fn remove_song(&self, repertoire_id: Uuid, song_id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Store<Event> {
    /// Published events starting at or after `now`, soonest first
    async fn list_upcoming(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<Event>>;

    /// Events starting within `[start, end]`, soonest first
    async fn list_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> RepoResult<Vec<Event>>;

    /// Events hosted at a venue, soonest first
    async fn list_by_venue(&self, venue_profile_id: Uuid) -> RepoResult<Vec<Event>>;
}

// ============================================================================
// Song Request Repository
// ============================================================================

/// Pure data access for song requests. `Store::create` reports a second
/// request for the same `(event, song, requester)` as `DuplicateRequest`.
#[async_trait]
pub trait SongRequestRepository: Store<SongRequest> {
    /// Find the request a user made for a song at an event
    async fn find_by_event_song_user(
        &self,
        event_id: Uuid,
        song_id: Uuid,
        requested_by_id: Uuid,
    ) -> RepoResult<Option<SongRequest>>;

    /// All requests for an event, newest first
    async fn list_by_event(&self, event_id: Uuid) -> RepoResult<Vec<SongRequest>>;

    /// Pending requests for an event, most votes first, then newest first
    async fn list_pending_by_event(&self, event_id: Uuid) -> RepoResult<Vec<SongRequest>>;

    /// All requests made by a user, newest first
    async fn list_by_user(&self, user_id: Uuid) -> RepoResult<Vec<SongRequest>>;

    /// Write the status fields of `request` only if the stored status is
    /// still `expected`. Returns whether the write happened.
    async fn update_status(&self, request: &SongRequest, expected: SongRequestStatus) -> RepoResult<bool>;

    /// Add one vote; returns the new count
    async fn increment_vote(&self, id: Uuid) -> RepoResult<i32>;

    /// Remove one vote, never going below zero; returns the new count
    async fn decrement_vote(&self, id: Uuid) -> RepoResult<i32>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_from_page() {
        assert_eq!(PageRequest::from_page(1, 20), PageRequest { offset: 0, limit: 20 });
        assert_eq!(PageRequest::from_page(3, 20), PageRequest { offset: 40, limit: 20 });
        assert_eq!(PageRequest::from_page(0, 0), PageRequest { offset: 0, limit: 1 });
        assert_eq!(PageRequest::from_page(2, 500), PageRequest { offset: 100, limit: 100 });
    }

    #[test]
    fn test_page_request_huge_page_saturates() {
        let page = PageRequest::from_page(i64::MAX, 100);
        assert_eq!(page.offset, i64::MAX);
        assert_eq!(page.limit, 100);

        let page = PageRequest::from_page(i64::MIN, i64::MIN);
        assert_eq!(page, PageRequest { offset: 0, limit: 1 });
    }
}
