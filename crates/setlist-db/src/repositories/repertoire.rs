//! PostgreSQL implementation of RepertoireRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use setlist_core::entities::Repertoire;
use setlist_core::error::DomainError;
use setlist_core::traits::{RepertoireRepository, RepoResult, Store};

use crate::mappers::{repertoire_with_songs, repertoires_with_songs};
use crate::models::{RepertoireModel, RepertoireSongModel};

use super::error::{map_db_error, map_write_error};

/// PostgreSQL implementation of RepertoireRepository
#[derive(Clone)]
pub struct PgRepertoireRepository {
    pool: PgPool,
}

impl PgRepertoireRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the join rows for a set of repertoires
    async fn load_songs(&self, repertoire_ids: &[Uuid]) -> RepoResult<Vec<RepertoireSongModel>> {
        if repertoire_ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, RepertoireSongModel>(
            r"
            SELECT rs.repertoire_id, rs.song_id, rs.position
            FROM repertoire_songs rs
            JOIN songs s ON s.id = rs.song_id
            WHERE rs.repertoire_id = ANY($1) AND s.deleted_at IS NULL
            ORDER BY rs.repertoire_id, rs.position
            ",
        )
        .bind(repertoire_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn attach_songs(&self, models: Vec<RepertoireModel>) -> RepoResult<Vec<Repertoire>> {
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let songs = self.load_songs(&ids).await?;
        Ok(repertoires_with_songs(models, &songs))
    }
}

#[async_trait]
impl Store<Repertoire> for PgRepertoireRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Repertoire>> {
        let result = sqlx::query_as::<_, RepertoireModel>(
            r"
            SELECT id, artist_profile_id, name, description, is_active, created_at, updated_at
            FROM repertoires
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                let songs = self.load_songs(&[model.id]).await?;
                Ok(Some(repertoire_with_songs(model, &songs)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Repertoire>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, RepertoireModel>(
            r"
            SELECT id, artist_profile_id, name, description, is_active, created_at, updated_at
            FROM repertoires
            WHERE id = ANY($1) AND deleted_at IS NULL
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.attach_songs(results).await
    }

    /// Inserts the repertoire row together with its initial song list
    #[instrument(skip(self, repertoire), fields(repertoire_id = %repertoire.id))]
    async fn create(&self, repertoire: &Repertoire) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO repertoires (id, artist_profile_id, name, description, is_active,
                                     created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(repertoire.id)
        .bind(repertoire.artist_profile_id)
        .bind(&repertoire.name)
        .bind(&repertoire.description)
        .bind(repertoire.is_active)
        .bind(repertoire.created_at)
        .bind(repertoire.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                |_| DomainError::DatabaseError("duplicate repertoire id".to_string()),
                || DomainError::ArtistProfileNotFound(repertoire.artist_profile_id),
            )
        })?;

        for (position, song_id) in (0_i32..).zip(repertoire.song_ids.iter().copied()) {
            sqlx::query(
                r"
                INSERT INTO repertoire_songs (repertoire_id, song_id, position)
                VALUES ($1, $2, $3)
                ON CONFLICT DO NOTHING
                ",
            )
            .bind(repertoire.id)
            .bind(song_id)
            .bind(position)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, |_| join_conflict(), || DomainError::SongNotFound(song_id)))?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, repertoire), fields(repertoire_id = %repertoire.id))]
    async fn update(&self, repertoire: &Repertoire) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE repertoires
            SET name = $2, description = $3, is_active = $4, updated_at = $5
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(repertoire.id)
        .bind(&repertoire.name)
        .bind(&repertoire.description)
        .bind(repertoire.is_active)
        .bind(repertoire.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RepertoireNotFound(repertoire.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE repertoires SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RepertoireNotFound(id));
        }

        Ok(())
    }
}

/// Primary-key clashes on the join table are swallowed by `ON CONFLICT`
fn join_conflict() -> DomainError {
    DomainError::DatabaseError("unexpected repertoire song conflict".to_string())
}

#[async_trait]
impl RepertoireRepository for PgRepertoireRepository {
    #[instrument(skip(self))]
    async fn list_by_artist(
        &self,
        artist_profile_id: Uuid,
        active_only: bool,
    ) -> RepoResult<Vec<Repertoire>> {
        let results = sqlx::query_as::<_, RepertoireModel>(
            r"
            SELECT id, artist_profile_id, name, description, is_active, created_at, updated_at
            FROM repertoires
            WHERE artist_profile_id = $1 AND deleted_at IS NULL
              AND (NOT $2 OR is_active)
            ORDER BY created_at DESC, id
            ",
        )
        .bind(artist_profile_id)
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.attach_songs(results).await
    }

    #[instrument(skip(self, song_ids), fields(count = song_ids.len()))]
    async fn append_songs(&self, repertoire_id: Uuid, song_ids: &[Uuid]) -> RepoResult<Vec<Uuid>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the repertoire row so concurrent appends get distinct positions
        let locked: Option<(Uuid,)> = sqlx::query_as(
            r"
            SELECT id FROM repertoires
            WHERE id = $1 AND deleted_at IS NULL
            FOR UPDATE
            ",
        )
        .bind(repertoire_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if locked.is_none() {
            return Err(DomainError::RepertoireNotFound(repertoire_id));
        }

        let (max_position,): (Option<i32>,) = sqlx::query_as(
            r"
            SELECT MAX(position) FROM repertoire_songs WHERE repertoire_id = $1
            ",
        )
        .bind(repertoire_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let mut next_position = max_position.map_or(0, |p| p + 1);
        let mut added = Vec::new();

        for &song_id in song_ids {
            let result = sqlx::query(
                r"
                INSERT INTO repertoire_songs (repertoire_id, song_id, position)
                VALUES ($1, $2, $3)
                ON CONFLICT DO NOTHING
                ",
            )
            .bind(repertoire_id)
            .bind(song_id)
            .bind(next_position)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, |_| join_conflict(), || DomainError::SongNotFound(song_id)))?;

            if result.rows_affected() > 0 {
                next_position += 1;
                added.push(song_id);
            }
        }

        if !added.is_empty() {
            sqlx::query("UPDATE repertoires SET updated_at = NOW() WHERE id = $1")
                .bind(repertoire_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        debug!(added = added.len(), "Appended songs to repertoire");
        Ok(added)
    }

    #[instrument(skip(self))]
    async fn remove_song(&self, repertoire_id: Uuid, song_id: Uuid) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM repertoire_songs rs
            USING repertoires r
            WHERE rs.repertoire_id = r.id AND r.id = $1 AND rs.song_id = $2
              AND r.deleted_at IS NULL
            ",
        )
        .bind(repertoire_id)
        .bind(song_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let removed = result.rows_affected() > 0;
        if removed {
            sqlx::query("UPDATE repertoires SET updated_at = NOW() WHERE id = $1")
                .bind(repertoire_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(removed)
    }
}
