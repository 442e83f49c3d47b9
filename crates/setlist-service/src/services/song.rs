//! Song catalog service
//!
//! Songs always belong to an existing genre. Listings come back ordered by
//! title and carry their genre.

use setlist_core::entities::{parse_duration, Song};
use setlist_core::traits::{PageRequest, Store};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateSongRequest, GenreResponse, SongResponse, UpdateSongRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::projection::project_songs;

/// Default number of popular songs returned
pub const DEFAULT_POPULAR_COUNT: i64 = 25;

/// Upper bound on `count` style parameters
pub const MAX_COUNT: i64 = 100;

pub struct SongService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SongService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a song to the catalog
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_song(&self, request: CreateSongRequest) -> ServiceResult<SongResponse> {
        let genre = self.ctx.genre_repo().get(request.genre_id).await?;
        let duration = normalize_duration(request.duration)?;

        let mut song = Song::new(
            Uuid::new_v4(),
            request.title.trim().to_string(),
            request.artist.trim().to_string(),
            genre.id,
        );
        song.duration = duration;
        song.difficulty = request.difficulty;
        song.key = request.key;
        song.notes = request.notes;
        song.year = request.year;
        song.is_popular = request.is_popular;
        song.set_lyrics(request.lyrics);

        self.ctx.song_repo().create(&song).await?;
        info!(song_id = %song.id, "Song created");

        Ok(SongResponse::new(&song, Some(&genre)))
    }

    #[instrument(skip(self))]
    pub async fn get_song(&self, song_id: Uuid) -> ServiceResult<SongResponse> {
        let song = self.ctx.song_repo().get(song_id).await?;
        let genre = self.ctx.genre_repo().find_by_id(song.genre_id).await?;
        Ok(SongResponse::new(&song, genre.as_ref()))
    }

    /// Change catalog fields; absent fields are left untouched
    #[instrument(skip(self, request))]
    pub async fn update_song(
        &self,
        song_id: Uuid,
        request: UpdateSongRequest,
    ) -> ServiceResult<SongResponse> {
        let mut song = self.ctx.song_repo().get(song_id).await?;

        if let Some(genre_id) = request.genre_id {
            self.ctx.genre_repo().get(genre_id).await?;
            song.genre_id = genre_id;
        }
        if let Some(title) = request.title {
            song.title = title.trim().to_string();
        }
        if let Some(artist) = request.artist {
            song.artist = artist.trim().to_string();
        }
        if request.duration.is_some() {
            song.duration = normalize_duration(request.duration)?;
        }
        if let Some(difficulty) = request.difficulty {
            song.difficulty = difficulty;
        }
        if let Some(key) = request.key {
            song.key = Some(key);
        }
        if let Some(notes) = request.notes {
            song.notes = Some(notes);
        }
        if let Some(year) = request.year {
            song.year = Some(year);
        }
        if let Some(is_popular) = request.is_popular {
            song.is_popular = is_popular;
        }
        if request.lyrics.is_some() {
            song.set_lyrics(request.lyrics);
        }
        song.updated_at = chrono::Utc::now();

        self.ctx.song_repo().update(&song).await?;
        info!(song_id = %song_id, "Song updated");

        let genre = self.ctx.genre_repo().find_by_id(song.genre_id).await?;
        Ok(SongResponse::new(&song, genre.as_ref()))
    }

    /// Remove a song from the catalog
    #[instrument(skip(self))]
    pub async fn delete_song(&self, song_id: Uuid) -> ServiceResult<()> {
        self.ctx.song_repo().get(song_id).await?;
        self.ctx.song_repo().delete(song_id).await?;
        info!(song_id = %song_id, "Song deleted");
        Ok(())
    }

    /// Songs of a genre, by title
    #[instrument(skip(self))]
    pub async fn list_by_genre(
        &self,
        genre_id: Uuid,
        page: PageRequest,
    ) -> ServiceResult<Vec<SongResponse>> {
        let songs = self.ctx.song_repo().list_by_genre(genre_id, page).await?;
        let genre = self.ctx.genre_repo().find_by_id(genre_id).await?;
        let genre = genre.as_ref().map(GenreResponse::from);

        Ok(songs
            .iter()
            .map(|song| {
                let mut view = SongResponse::new(song, None);
                view.genre = genre.clone();
                view
            })
            .collect())
    }

    /// Case-insensitive search over title, artist and genre name
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, page: PageRequest) -> ServiceResult<Vec<SongResponse>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::validation("Search query cannot be empty"));
        }

        let songs = self.ctx.song_repo().search(query, page).await?;
        project_songs(self.ctx, &songs).await
    }

    /// Songs flagged popular, by title
    ///
    /// `count` defaults to [`DEFAULT_POPULAR_COUNT`] and is clamped to
    /// `1..=MAX_COUNT`.
    #[instrument(skip(self))]
    pub async fn popular(&self, count: Option<i64>) -> ServiceResult<Vec<SongResponse>> {
        let limit = count.unwrap_or(DEFAULT_POPULAR_COUNT).clamp(1, MAX_COUNT);
        let songs = self.ctx.song_repo().list_popular(limit).await?;
        project_songs(self.ctx, &songs).await
    }
}

/// Blank durations are dropped; anything else must be `mm:ss`
fn normalize_duration(duration: Option<String>) -> ServiceResult<Option<String>> {
    match duration.map(|d| d.trim().to_string()) {
        None => Ok(None),
        Some(d) if d.is_empty() => Ok(None),
        Some(d) if parse_duration(&d).is_some() => Ok(Some(d)),
        Some(d) => Err(ServiceError::validation(format!(
            "Duration must be mm:ss, got '{d}'"
        ))),
    }
}
