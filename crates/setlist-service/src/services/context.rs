//! Service context - dependency container for services
//!
//! Holds the repositories and the storage health probe. Either backend can
//! fill it: [`ServiceContext::postgres`] or [`ServiceContext::in_memory`].

use std::sync::Arc;

use setlist_core::traits::{
    ArtistProfileRepository, EventRepository, GenreRepository, RepertoireRepository,
    SongRepository, SongRequestRepository, StorageHealth, UserRepository, VenueProfileRepository,
};
use setlist_db::{
    MemoryBackend, MemoryStorageHealth, PgArtistProfileRepository, PgEventRepository,
    PgGenreRepository, PgPool, PgRepertoireRepository, PgSongRepository, PgSongRequestRepository,
    PgStorageHealth, PgUserRepository, PgVenueProfileRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every field is behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    genre_repo: Arc<dyn GenreRepository>,
    song_repo: Arc<dyn SongRepository>,
    artist_repo: Arc<dyn ArtistProfileRepository>,
    venue_repo: Arc<dyn VenueProfileRepository>,
    repertoire_repo: Arc<dyn RepertoireRepository>,
    event_repo: Arc<dyn EventRepository>,
    song_request_repo: Arc<dyn SongRequestRepository>,
    storage_health: Arc<dyn StorageHealth>,
}

impl ServiceContext {
    /// Wire every repository to one PostgreSQL pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            genre_repo: Arc::new(PgGenreRepository::new(pool.clone())),
            song_repo: Arc::new(PgSongRepository::new(pool.clone())),
            artist_repo: Arc::new(PgArtistProfileRepository::new(pool.clone())),
            venue_repo: Arc::new(PgVenueProfileRepository::new(pool.clone())),
            repertoire_repo: Arc::new(PgRepertoireRepository::new(pool.clone())),
            event_repo: Arc::new(PgEventRepository::new(pool.clone())),
            song_request_repo: Arc::new(PgSongRequestRepository::new(pool.clone())),
            storage_health: Arc::new(PgStorageHealth::new(pool)),
        }
    }

    /// Wire every repository to a fresh set of in-memory tables
    pub fn in_memory() -> Self {
        Self::from_memory(&MemoryBackend::new())
    }

    /// Wire every repository to an existing in-memory backend
    pub fn from_memory(backend: &MemoryBackend) -> Self {
        Self {
            user_repo: backend.users.clone(),
            genre_repo: backend.genres.clone(),
            song_repo: backend.songs.clone(),
            artist_repo: backend.artist_profiles.clone(),
            venue_repo: backend.venue_profiles.clone(),
            repertoire_repo: backend.repertoires.clone(),
            event_repo: backend.events.clone(),
            song_request_repo: backend.song_requests.clone(),
            storage_health: Arc::new(MemoryStorageHealth),
        }
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn genre_repo(&self) -> &dyn GenreRepository {
        self.genre_repo.as_ref()
    }

    pub fn song_repo(&self) -> &dyn SongRepository {
        self.song_repo.as_ref()
    }

    pub fn artist_repo(&self) -> &dyn ArtistProfileRepository {
        self.artist_repo.as_ref()
    }

    pub fn venue_repo(&self) -> &dyn VenueProfileRepository {
        self.venue_repo.as_ref()
    }

    pub fn repertoire_repo(&self) -> &dyn RepertoireRepository {
        self.repertoire_repo.as_ref()
    }

    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    pub fn song_request_repo(&self) -> &dyn SongRequestRepository {
        self.song_request_repo.as_ref()
    }

    // === Health ===

    pub fn storage_health(&self) -> &dyn StorageHealth {
        self.storage_health.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("backend", &self.storage_health.backend())
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for assembling a ServiceContext from individual repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    genre_repo: Option<Arc<dyn GenreRepository>>,
    song_repo: Option<Arc<dyn SongRepository>>,
    artist_repo: Option<Arc<dyn ArtistProfileRepository>>,
    venue_repo: Option<Arc<dyn VenueProfileRepository>>,
    repertoire_repo: Option<Arc<dyn RepertoireRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    song_request_repo: Option<Arc<dyn SongRequestRepository>>,
    storage_health: Option<Arc<dyn StorageHealth>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn genre_repo(mut self, repo: Arc<dyn GenreRepository>) -> Self {
        self.genre_repo = Some(repo);
        self
    }

    pub fn song_repo(mut self, repo: Arc<dyn SongRepository>) -> Self {
        self.song_repo = Some(repo);
        self
    }

    pub fn artist_repo(mut self, repo: Arc<dyn ArtistProfileRepository>) -> Self {
        self.artist_repo = Some(repo);
        self
    }

    pub fn venue_repo(mut self, repo: Arc<dyn VenueProfileRepository>) -> Self {
        self.venue_repo = Some(repo);
        self
    }

    pub fn repertoire_repo(mut self, repo: Arc<dyn RepertoireRepository>) -> Self {
        self.repertoire_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn song_request_repo(mut self, repo: Arc<dyn SongRequestRepository>) -> Self {
        self.song_request_repo = Some(repo);
        self
    }

    pub fn storage_health(mut self, health: Arc<dyn StorageHealth>) -> Self {
        self.storage_health = Some(health);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext {
            user_repo: required(self.user_repo, "user_repo")?,
            genre_repo: required(self.genre_repo, "genre_repo")?,
            song_repo: required(self.song_repo, "song_repo")?,
            artist_repo: required(self.artist_repo, "artist_repo")?,
            venue_repo: required(self.venue_repo, "venue_repo")?,
            repertoire_repo: required(self.repertoire_repo, "repertoire_repo")?,
            event_repo: required(self.event_repo, "event_repo")?,
            song_request_repo: required(self.song_request_repo, "song_request_repo")?,
            storage_health: required(self.storage_health, "storage_health")?,
        })
    }
}
