//! PostgreSQL implementation of GenreRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use setlist_core::entities::Genre;
use setlist_core::error::DomainError;
use setlist_core::traits::{GenreRepository, RepoResult, Store};

use crate::models::GenreModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of GenreRepository
#[derive(Clone)]
pub struct PgGenreRepository {
    pool: PgPool,
}

impl PgGenreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store<Genre> for PgGenreRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Genre>> {
        let result = sqlx::query_as::<_, GenreModel>(
            r"
            SELECT id, name, color, description, created_at, updated_at
            FROM genres
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Genre::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Genre>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, GenreModel>(
            r"
            SELECT id, name, color, description, created_at, updated_at
            FROM genres
            WHERE id = ANY($1) AND deleted_at IS NULL
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Genre::from).collect())
    }

    #[instrument(skip(self, genre), fields(genre = %genre.name))]
    async fn create(&self, genre: &Genre) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO genres (id, name, color, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(genre.id)
        .bind(&genre.name)
        .bind(&genre.color)
        .bind(&genre.description)
        .bind(genre.created_at)
        .bind(genre.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::GenreAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, genre), fields(genre_id = %genre.id))]
    async fn update(&self, genre: &Genre) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE genres
            SET name = $2, color = $3, description = $4, updated_at = $5
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(genre.id)
        .bind(&genre.name)
        .bind(&genre.color)
        .bind(&genre.description)
        .bind(genre.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::GenreAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GenreNotFound(genre.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE genres SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GenreNotFound(id));
        }

        Ok(())
    }
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Genre>> {
        let result = sqlx::query_as::<_, GenreModel>(
            r"
            SELECT id, name, color, description, created_at, updated_at
            FROM genres
            WHERE LOWER(name) = LOWER($1) AND deleted_at IS NULL
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Genre::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Genre>> {
        let results = sqlx::query_as::<_, GenreModel>(
            r"
            SELECT id, name, color, description, created_at, updated_at
            FROM genres
            WHERE deleted_at IS NULL
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Genre::from).collect())
    }
}
