//! In-memory storage backend
//!
//! Implements every repository trait without a database. Used by the test
//! suites and by `STORAGE_BACKEND=memory` for local runs. Rows live for the
//! lifetime of the process; deletes remove rows outright.

mod repositories;
mod store;

use std::sync::Arc;

use async_trait::async_trait;
use setlist_core::entities::{ArtistProfile, Event, Genre, SongRequest, User, VenueProfile};
use setlist_core::error::DomainError;
use setlist_core::traits::{RepoResult, StorageHealth};

pub use repositories::{MemoryRepertoireRepository, MemorySongRepository};
pub use store::{MemoryStore, UniqueKey};

/// One set of in-memory tables sharing the same lifetime
#[derive(Clone)]
pub struct MemoryBackend {
    pub users: Arc<MemoryStore<User>>,
    pub genres: Arc<MemoryStore<Genre>>,
    pub songs: Arc<MemorySongRepository>,
    pub artist_profiles: Arc<MemoryStore<ArtistProfile>>,
    pub venue_profiles: Arc<MemoryStore<VenueProfile>>,
    pub repertoires: Arc<MemoryRepertoireRepository>,
    pub events: Arc<MemoryStore<Event>>,
    pub song_requests: Arc<MemoryStore<SongRequest>>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Empty tables with the same unique keys as the SQL schema
    pub fn new() -> Self {
        let users = MemoryStore::new()
            .with_unique(UniqueKey::new(
                "users_email_key",
                |u: &User| u.email.to_lowercase(),
                || DomainError::EmailAlreadyExists,
            ))
            .with_unique(UniqueKey::new(
                "users_username_key",
                |u: &User| u.username.to_lowercase(),
                || DomainError::UsernameAlreadyExists,
            ));

        let genres = Arc::new(MemoryStore::new().with_unique(UniqueKey::new(
            "genres_name_key",
            |g: &Genre| g.name.to_lowercase(),
            || DomainError::GenreAlreadyExists,
        )));

        let artist_profiles = MemoryStore::new().with_unique(UniqueKey::new(
            "artist_profiles_user_key",
            |p: &ArtistProfile| p.user_id.to_string(),
            || DomainError::ArtistProfileAlreadyExists,
        ));

        let venue_profiles = MemoryStore::new().with_unique(UniqueKey::new(
            "venue_profiles_user_key",
            |v: &VenueProfile| v.user_id.to_string(),
            || DomainError::VenueProfileAlreadyExists,
        ));

        let song_requests = MemoryStore::new().with_unique(UniqueKey::new(
            "song_requests_event_song_requester_key",
            |r: &SongRequest| format!("{}:{}:{}", r.event_id, r.song_id, r.requested_by_id),
            || DomainError::DuplicateRequest,
        ));

        let songs = Arc::new(MemorySongRepository::new(Arc::clone(&genres)));
        let repertoires = Arc::new(MemoryRepertoireRepository::new(Arc::clone(&songs)));

        Self {
            users: Arc::new(users),
            genres,
            songs,
            artist_profiles: Arc::new(artist_profiles),
            venue_profiles: Arc::new(venue_profiles),
            repertoires,
            events: Arc::new(MemoryStore::new()),
            song_requests: Arc::new(song_requests),
        }
    }
}

/// The in-memory backend is always ready
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStorageHealth;

#[async_trait]
impl StorageHealth for MemoryStorageHealth {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
