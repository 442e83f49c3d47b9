//! PostgreSQL implementation of SongRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use setlist_core::entities::Song;
use setlist_core::error::DomainError;
use setlist_core::traits::{PageRequest, RepoResult, SongRepository, Store};
use setlist_core::value_objects::StoredCode;

use crate::mappers::try_collect;
use crate::models::SongModel;

use super::error::{map_db_error, map_write_error};

/// PostgreSQL implementation of SongRepository
#[derive(Clone)]
pub struct PgSongRepository {
    pool: PgPool,
}

impl PgSongRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside `LIKE`
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl Store<Song> for PgSongRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Song>> {
        let result = sqlx::query_as::<_, SongModel>(
            r"
            SELECT id, title, artist, genre_id, duration, difficulty, musical_key, has_lyrics,
                   lyrics, notes, year, is_popular, created_at, updated_at
            FROM songs
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Song::try_from).transpose()
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Song>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, SongModel>(
            r"
            SELECT id, title, artist, genre_id, duration, difficulty, musical_key, has_lyrics,
                   lyrics, notes, year, is_popular, created_at, updated_at
            FROM songs
            WHERE id = ANY($1) AND deleted_at IS NULL
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self, song), fields(song_id = %song.id))]
    async fn create(&self, song: &Song) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO songs (id, title, artist, genre_id, duration, difficulty, musical_key,
                               has_lyrics, lyrics, notes, year, is_popular, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(song.id)
        .bind(&song.title)
        .bind(&song.artist)
        .bind(song.genre_id)
        .bind(&song.duration)
        .bind(song.difficulty.code())
        .bind(&song.key)
        .bind(song.has_lyrics)
        .bind(&song.lyrics)
        .bind(&song.notes)
        .bind(song.year)
        .bind(song.is_popular)
        .bind(song.created_at)
        .bind(song.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                |_| DomainError::DatabaseError("duplicate song id".to_string()),
                || DomainError::GenreNotFound(song.genre_id),
            )
        })?;

        Ok(())
    }

    #[instrument(skip(self, song), fields(song_id = %song.id))]
    async fn update(&self, song: &Song) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE songs
            SET title = $2, artist = $3, genre_id = $4, duration = $5, difficulty = $6,
                musical_key = $7, has_lyrics = $8, lyrics = $9, notes = $10, year = $11,
                is_popular = $12, updated_at = $13
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(song.id)
        .bind(&song.title)
        .bind(&song.artist)
        .bind(song.genre_id)
        .bind(&song.duration)
        .bind(song.difficulty.code())
        .bind(&song.key)
        .bind(song.has_lyrics)
        .bind(&song.lyrics)
        .bind(&song.notes)
        .bind(song.year)
        .bind(song.is_popular)
        .bind(song.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                |_| DomainError::DatabaseError("duplicate song id".to_string()),
                || DomainError::GenreNotFound(song.genre_id),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SongNotFound(song.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE songs SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SongNotFound(id));
        }

        Ok(())
    }
}

#[async_trait]
impl SongRepository for PgSongRepository {
    #[instrument(skip(self))]
    async fn list_by_genre(&self, genre_id: Uuid, page: PageRequest) -> RepoResult<Vec<Song>> {
        let results = sqlx::query_as::<_, SongModel>(
            r"
            SELECT id, title, artist, genre_id, duration, difficulty, musical_key, has_lyrics,
                   lyrics, notes, year, is_popular, created_at, updated_at
            FROM songs
            WHERE genre_id = $1 AND deleted_at IS NULL
            ORDER BY title, id
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(genre_id)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str, page: PageRequest) -> RepoResult<Vec<Song>> {
        let results = sqlx::query_as::<_, SongModel>(
            r"
            SELECT s.id, s.title, s.artist, s.genre_id, s.duration, s.difficulty, s.musical_key,
                   s.has_lyrics, s.lyrics, s.notes, s.year, s.is_popular, s.created_at, s.updated_at
            FROM songs s
            JOIN genres g ON g.id = s.genre_id
            WHERE s.deleted_at IS NULL
              AND (s.title ILIKE $1 OR s.artist ILIKE $1 OR g.name ILIKE $1)
            ORDER BY s.title, s.id
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(like_pattern(query))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self))]
    async fn list_popular(&self, limit: i64) -> RepoResult<Vec<Song>> {
        let results = sqlx::query_as::<_, SongModel>(
            r"
            SELECT id, title, artist, genre_id, duration, difficulty, musical_key, has_lyrics,
                   lyrics, notes, year, is_popular, created_at, updated_at
            FROM songs
            WHERE is_popular AND deleted_at IS NULL
            ORDER BY title, id
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("ipanema"), "%ipanema%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }
}
