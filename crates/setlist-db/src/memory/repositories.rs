//! Capability traits for the in-memory backend
//!
//! Orderings match the SQL in `crate::repositories` so both backends list
//! rows identically.

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use setlist_core::entities::{
    ArtistProfile, Event, Genre, Repertoire, Song, SongRequest, User, VenueProfile,
};
use setlist_core::error::DomainError;
use setlist_core::traits::{
    ArtistProfileRepository, EventRepository, GenreRepository, PageRequest, RepertoireRepository,
    RepoResult, SongRepository, SongRequestRepository, Store, UserRepository, VenueProfileRepository,
};
use setlist_core::value_objects::SongRequestStatus;

use super::store::MemoryStore;

/// Apply offset pagination to an already ordered list
fn paginate<T>(rows: Vec<T>, page: PageRequest) -> Vec<T> {
    let offset = usize::try_from(page.offset).unwrap_or(0);
    let limit = usize::try_from(page.limit).unwrap_or(0);
    rows.into_iter().skip(offset).take(limit).collect()
}

fn newest_first(requests: &mut [SongRequest]) {
    requests.sort_by_key(|r| (Reverse(r.created_at), r.id));
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
impl UserRepository for MemoryStore<User> {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email = email.to_lowercase();
        Ok(self.find_first(|u| u.email.to_lowercase() == email))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let username = username.to_lowercase();
        Ok(self.find_first(|u| u.username.to_lowercase() == username))
    }
}

// ============================================================================
// Genres
// ============================================================================

#[async_trait]
impl GenreRepository for MemoryStore<Genre> {
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Genre>> {
        let name = name.to_lowercase();
        Ok(self.find_first(|g| g.name.to_lowercase() == name))
    }

    async fn list_all(&self) -> RepoResult<Vec<Genre>> {
        let mut genres = self.select(|_| true);
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }
}

// ============================================================================
// Songs
// ============================================================================

/// Song table that can see genre names for searching
pub struct MemorySongRepository {
    songs: MemoryStore<Song>,
    genres: Arc<MemoryStore<Genre>>,
}

impl MemorySongRepository {
    pub fn new(genres: Arc<MemoryStore<Genre>>) -> Self {
        Self {
            songs: MemoryStore::new(),
            genres,
        }
    }

    fn by_title(mut songs: Vec<Song>) -> Vec<Song> {
        songs.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        songs
    }
}

#[async_trait]
impl Store<Song> for MemorySongRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Song>> {
        self.songs.find_by_id(id).await
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Song>> {
        self.songs.find_by_ids(ids).await
    }

    async fn create(&self, song: &Song) -> RepoResult<()> {
        if !self.genres.exists(song.genre_id).await? {
            return Err(DomainError::GenreNotFound(song.genre_id));
        }
        self.songs.create(song).await
    }

    async fn update(&self, song: &Song) -> RepoResult<()> {
        if !self.genres.exists(song.genre_id).await? {
            return Err(DomainError::GenreNotFound(song.genre_id));
        }
        self.songs.update(song).await
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.songs.delete(id).await
    }
}

#[async_trait]
impl SongRepository for MemorySongRepository {
    async fn list_by_genre(&self, genre_id: Uuid, page: PageRequest) -> RepoResult<Vec<Song>> {
        let songs = self.songs.select(|s| s.genre_id == genre_id);
        Ok(paginate(Self::by_title(songs), page))
    }

    async fn search(&self, query: &str, page: PageRequest) -> RepoResult<Vec<Song>> {
        let needle = query.to_lowercase();
        let genre_hits: Vec<Uuid> = self
            .genres
            .select(|g| g.name.to_lowercase().contains(&needle))
            .into_iter()
            .map(|g| g.id)
            .collect();

        let songs = self
            .songs
            .select(|s| s.matches(&needle) || genre_hits.contains(&s.genre_id));
        Ok(paginate(Self::by_title(songs), page))
    }

    async fn list_popular(&self, limit: i64) -> RepoResult<Vec<Song>> {
        let songs = self.songs.select(|s| s.is_popular);
        Ok(paginate(Self::by_title(songs), PageRequest { offset: 0, limit }))
    }
}

// ============================================================================
// Artist profiles
// ============================================================================

#[async_trait]
impl ArtistProfileRepository for MemoryStore<ArtistProfile> {
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<ArtistProfile>> {
        Ok(self.find_first(|p| p.user_id == user_id))
    }
}

// ============================================================================
// Venue profiles
// ============================================================================

#[async_trait]
impl VenueProfileRepository for MemoryStore<VenueProfile> {
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<VenueProfile>> {
        Ok(self.find_first(|p| p.user_id == user_id))
    }

    async fn list_by_city(&self, city: &str) -> RepoResult<Vec<VenueProfile>> {
        let mut venues = self.select(|v| v.is_in_city(city));
        venues.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(venues)
    }
}

// ============================================================================
// Repertoires
// ============================================================================

/// Repertoire table that hides songs deleted from the catalog
pub struct MemoryRepertoireRepository {
    repertoires: MemoryStore<Repertoire>,
    songs: Arc<MemorySongRepository>,
}

impl MemoryRepertoireRepository {
    pub fn new(songs: Arc<MemorySongRepository>) -> Self {
        Self {
            repertoires: MemoryStore::new(),
            songs,
        }
    }

    async fn visible(&self, mut repertoire: Repertoire) -> RepoResult<Repertoire> {
        let live = self.songs.find_by_ids(&repertoire.song_ids).await?;
        repertoire
            .song_ids
            .retain(|id| live.iter().any(|song| song.id == *id));
        Ok(repertoire)
    }

    async fn visible_all(&self, repertoires: Vec<Repertoire>) -> RepoResult<Vec<Repertoire>> {
        let mut result = Vec::with_capacity(repertoires.len());
        for repertoire in repertoires {
            result.push(self.visible(repertoire).await?);
        }
        Ok(result)
    }
}

#[async_trait]
impl Store<Repertoire> for MemoryRepertoireRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Repertoire>> {
        match self.repertoires.find_by_id(id).await? {
            Some(repertoire) => Ok(Some(self.visible(repertoire).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Repertoire>> {
        let found = self.repertoires.find_by_ids(ids).await?;
        self.visible_all(found).await
    }

    async fn create(&self, repertoire: &Repertoire) -> RepoResult<()> {
        let mut stored = repertoire.clone();
        stored.song_ids.clear();
        stored.append_songs(&repertoire.song_ids);
        self.repertoires.create(&stored).await
    }

    async fn update(&self, repertoire: &Repertoire) -> RepoResult<()> {
        self.repertoires.modify(repertoire.id, |stored| {
            stored.name.clone_from(&repertoire.name);
            stored.description.clone_from(&repertoire.description);
            stored.is_active = repertoire.is_active;
            stored.updated_at = repertoire.updated_at;
        })
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.repertoires.delete(id).await
    }
}

#[async_trait]
impl RepertoireRepository for MemoryRepertoireRepository {
    async fn list_by_artist(
        &self,
        artist_profile_id: Uuid,
        active_only: bool,
    ) -> RepoResult<Vec<Repertoire>> {
        let mut found = self
            .repertoires
            .select(|r| r.artist_profile_id == artist_profile_id && (!active_only || r.is_active));
        found.sort_by_key(|r| (Reverse(r.created_at), r.id));
        self.visible_all(found).await
    }

    async fn append_songs(&self, repertoire_id: Uuid, song_ids: &[Uuid]) -> RepoResult<Vec<Uuid>> {
        let live = self.songs.find_by_ids(song_ids).await?;
        if let Some(missing) = song_ids
            .iter()
            .find(|id| !live.iter().any(|song| song.id == **id))
        {
            return Err(DomainError::SongNotFound(*missing));
        }
        self.repertoires
            .modify(repertoire_id, |stored| stored.append_songs(song_ids))
    }

    async fn remove_song(&self, repertoire_id: Uuid, song_id: Uuid) -> RepoResult<bool> {
        self.repertoires
            .modify(repertoire_id, |stored| stored.remove_song(song_id))
    }
}

// ============================================================================
// Events
// ============================================================================

#[async_trait]
impl EventRepository for MemoryStore<Event> {
    async fn list_upcoming(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<Event>> {
        let mut events = self.select(|e| e.is_upcoming(now));
        events.sort_by_key(|e| (e.starts_at, e.id));
        Ok(paginate(events, PageRequest { offset: 0, limit }))
    }

    async fn list_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> RepoResult<Vec<Event>> {
        let mut events = self.select(|e| e.starts_at >= start && e.starts_at <= end);
        events.sort_by_key(|e| (e.starts_at, e.id));
        Ok(events)
    }

    async fn list_by_venue(&self, venue_profile_id: Uuid) -> RepoResult<Vec<Event>> {
        let mut events = self.select(|e| e.venue_profile_id == Some(venue_profile_id));
        events.sort_by_key(|e| (e.starts_at, e.id));
        Ok(events)
    }
}

// ============================================================================
// Song requests
// ============================================================================

#[async_trait]
impl SongRequestRepository for MemoryStore<SongRequest> {
    async fn find_by_event_song_user(
        &self,
        event_id: Uuid,
        song_id: Uuid,
        requested_by_id: Uuid,
    ) -> RepoResult<Option<SongRequest>> {
        Ok(self.find_first(|r| {
            r.event_id == event_id && r.song_id == song_id && r.requested_by_id == requested_by_id
        }))
    }

    async fn list_by_event(&self, event_id: Uuid) -> RepoResult<Vec<SongRequest>> {
        let mut requests = self.select(|r| r.event_id == event_id);
        newest_first(&mut requests);
        Ok(requests)
    }

    async fn list_pending_by_event(&self, event_id: Uuid) -> RepoResult<Vec<SongRequest>> {
        let mut requests = self.select(|r| r.event_id == event_id && r.is_pending());
        requests.sort_by_key(|r| (Reverse(r.votes), Reverse(r.created_at), r.id));
        Ok(requests)
    }

    async fn list_by_user(&self, user_id: Uuid) -> RepoResult<Vec<SongRequest>> {
        let mut requests = self.select(|r| r.requested_by_id == user_id);
        newest_first(&mut requests);
        Ok(requests)
    }

    async fn update_status(&self, request: &SongRequest, expected: SongRequestStatus) -> RepoResult<bool> {
        self.modify(request.id, |stored| {
            if stored.status != expected {
                return false;
            }
            stored.status = request.status;
            stored.updated_at = request.updated_at;
            stored.played_at = request.played_at;
            true
        })
    }

    async fn increment_vote(&self, id: Uuid) -> RepoResult<i32> {
        self.modify(id, |stored| {
            stored.votes = stored.votes.saturating_add(1);
            stored.updated_at = Utc::now();
            stored.votes
        })
    }

    async fn decrement_vote(&self, id: Uuid) -> RepoResult<i32> {
        self.modify(id, |stored| {
            stored.votes = (stored.votes - 1).max(0);
            stored.updated_at = Utc::now();
            stored.votes
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::memory::MemoryBackend;

    fn request(event_id: Uuid) -> SongRequest {
        SongRequest::new(Uuid::new_v4(), event_id, Uuid::new_v4(), Uuid::new_v4(), None).unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_request_rejected() {
        let backend = MemoryBackend::new();
        let first = request(Uuid::new_v4());
        backend.song_requests.create(&first).await.unwrap();

        let mut second = first.clone();
        second.id = Uuid::new_v4();
        let err = backend.song_requests.create(&second).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateRequest));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicates_admit_exactly_one() {
        let backend = MemoryBackend::new();
        let template = request(Uuid::new_v4());

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = Arc::clone(&backend.song_requests);
            let mut candidate = template.clone();
            candidate.id = Uuid::new_v4();
            handles.push(tokio::spawn(async move { store.create(&candidate).await }));
        }

        let mut admitted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => admitted += 1,
                Err(e) => assert!(matches!(e, DomainError::DuplicateRequest)),
            }
        }
        assert_eq!(admitted, 1);
        assert_eq!(backend.song_requests.len(), 1);
    }

    #[tokio::test]
    async fn test_pending_ordered_by_votes_then_newest() {
        let backend = MemoryBackend::new();
        let event_id = Uuid::new_v4();
        let now = Utc::now();

        let mut older = request(event_id);
        older.created_at = now - Duration::minutes(10);
        let mut newer = request(event_id);
        newer.created_at = now;
        let mut popular = request(event_id);
        popular.created_at = now - Duration::minutes(20);
        let mut accepted = request(event_id);
        accepted.created_at = now - Duration::minutes(5);
        accepted.transition_to(SongRequestStatus::Accepted).unwrap();

        for r in [&older, &newer, &popular, &accepted] {
            backend.song_requests.create(r).await.unwrap();
        }
        backend.song_requests.increment_vote(popular.id).await.unwrap();

        let pending = backend.song_requests.list_pending_by_event(event_id).await.unwrap();
        let ids: Vec<Uuid> = pending.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![popular.id, newer.id, older.id]);

        let all = backend.song_requests.list_by_event(event_id).await.unwrap();
        let ids: Vec<Uuid> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![newer.id, accepted.id, older.id, popular.id]);
    }

    #[tokio::test]
    async fn test_votes_never_negative() {
        let backend = MemoryBackend::new();
        let req = request(Uuid::new_v4());
        backend.song_requests.create(&req).await.unwrap();

        assert_eq!(backend.song_requests.decrement_vote(req.id).await.unwrap(), 0);
        assert_eq!(backend.song_requests.increment_vote(req.id).await.unwrap(), 1);
        assert_eq!(backend.song_requests.decrement_vote(req.id).await.unwrap(), 0);

        let missing = Uuid::new_v4();
        assert!(matches!(
            backend.song_requests.increment_vote(missing).await.unwrap_err(),
            DomainError::SongRequestNotFound(id) if id == missing
        ));
    }

    #[tokio::test]
    async fn test_update_status_compares_before_writing() {
        let backend = MemoryBackend::new();
        let req = request(Uuid::new_v4());
        backend.song_requests.create(&req).await.unwrap();

        let mut accepted = req.clone();
        accepted.transition_to(SongRequestStatus::Accepted).unwrap();
        let mut declined = req.clone();
        declined.transition_to(SongRequestStatus::Declined).unwrap();

        assert!(backend
            .song_requests
            .update_status(&accepted, SongRequestStatus::Pending)
            .await
            .unwrap());
        assert!(!backend
            .song_requests
            .update_status(&declined, SongRequestStatus::Pending)
            .await
            .unwrap());

        let stored = backend.song_requests.get(req.id).await.unwrap();
        assert_eq!(stored.status, SongRequestStatus::Accepted);
    }

    #[tokio::test]
    async fn test_song_search_covers_genre_name() {
        let backend = MemoryBackend::new();
        let bossa = Genre::new(Uuid::new_v4(), "Bossa Nova".to_string());
        let rock = Genre::new(Uuid::new_v4(), "Rock".to_string());
        backend.genres.create(&bossa).await.unwrap();
        backend.genres.create(&rock).await.unwrap();

        let ipanema = Song::new(
            Uuid::new_v4(),
            "Garota de Ipanema".to_string(),
            "Tom Jobim".to_string(),
            bossa.id,
        );
        let creep = Song::new(Uuid::new_v4(), "Creep".to_string(), "Radiohead".to_string(), rock.id);
        backend.songs.create(&ipanema).await.unwrap();
        backend.songs.create(&creep).await.unwrap();

        let hits = backend.songs.search("BOSSA", PageRequest::default()).await.unwrap();
        assert_eq!(hits, vec![ipanema.clone()]);

        let hits = backend.songs.search("radio", PageRequest::default()).await.unwrap();
        assert_eq!(hits, vec![creep]);

        let orphan = Song::new(Uuid::new_v4(), "Lost".to_string(), "Nobody".to_string(), Uuid::new_v4());
        assert!(matches!(
            backend.songs.create(&orphan).await.unwrap_err(),
            DomainError::GenreNotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_repertoire_hides_deleted_songs() {
        let backend = MemoryBackend::new();
        let genre = Genre::new(Uuid::new_v4(), "Samba".to_string());
        backend.genres.create(&genre).await.unwrap();
        let a = Song::new(Uuid::new_v4(), "Aquarela".to_string(), "Toquinho".to_string(), genre.id);
        let b = Song::new(Uuid::new_v4(), "Trem das Onze".to_string(), "Adoniran".to_string(), genre.id);
        backend.songs.create(&a).await.unwrap();
        backend.songs.create(&b).await.unwrap();

        let repertoire = Repertoire::new(Uuid::new_v4(), Uuid::new_v4(), "Roda".to_string());
        backend.repertoires.create(&repertoire).await.unwrap();
        let added = backend
            .repertoires
            .append_songs(repertoire.id, &[a.id, b.id, a.id])
            .await
            .unwrap();
        assert_eq!(added, vec![a.id, b.id]);

        backend.songs.delete(a.id).await.unwrap();
        let stored = backend.repertoires.get(repertoire.id).await.unwrap();
        assert_eq!(stored.song_ids, vec![b.id]);
    }

    #[tokio::test]
    async fn test_venues_listed_by_city_best_rated_first() {
        use setlist_core::entities::VenueAddress;
        use setlist_core::value_objects::VenueType;

        let backend = MemoryBackend::new();
        let venue = |name: &str, city: &str, rating: f64| {
            let mut v = VenueProfile::new(Uuid::new_v4(), Uuid::new_v4(), name.to_string(), VenueType::Bar);
            v.rating = rating;
            v.address = Some(VenueAddress {
                city: city.to_string(),
                ..VenueAddress::default()
            });
            v
        };

        let modest = venue("Bar do Zé", "Recife", 3.5);
        let famous = venue("Casa da Música", "recife", 4.8);
        let elsewhere = venue("Boteco", "Olinda", 5.0);
        for v in [&modest, &famous, &elsewhere] {
            backend.venue_profiles.create(v).await.unwrap();
        }

        let ids: Vec<Uuid> = backend
            .venue_profiles
            .list_by_city("RECIFE")
            .await
            .unwrap()
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![famous.id, modest.id]);

        let mut second = modest.clone();
        second.id = Uuid::new_v4();
        assert!(matches!(
            backend.venue_profiles.create(&second).await.unwrap_err(),
            DomainError::VenueProfileAlreadyExists
        ));
    }
}
