//! PostgreSQL implementation of ArtistProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use setlist_core::entities::ArtistProfile;
use setlist_core::error::DomainError;
use setlist_core::traits::{ArtistProfileRepository, RepoResult, Store};

use crate::models::ArtistProfileModel;

use super::error::{map_db_error, map_write_error};

/// PostgreSQL implementation of ArtistProfileRepository
#[derive(Clone)]
pub struct PgArtistProfileRepository {
    pool: PgPool,
}

impl PgArtistProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store<ArtistProfile> for PgArtistProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ArtistProfile>> {
        let result = sqlx::query_as::<_, ArtistProfileModel>(
            r"
            SELECT id, user_id, stage_name, description, is_verified, followers, rating,
                   created_at, updated_at
            FROM artist_profiles
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ArtistProfile::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<ArtistProfile>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, ArtistProfileModel>(
            r"
            SELECT id, user_id, stage_name, description, is_verified, followers, rating,
                   created_at, updated_at
            FROM artist_profiles
            WHERE id = ANY($1) AND deleted_at IS NULL
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ArtistProfile::from).collect())
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn create(&self, profile: &ArtistProfile) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO artist_profiles (id, user_id, stage_name, description, is_verified,
                                         followers, rating, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(profile.id)
        .bind(profile.user_id)
        .bind(&profile.stage_name)
        .bind(&profile.description)
        .bind(profile.is_verified)
        .bind(profile.followers)
        .bind(profile.rating)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                |_| DomainError::ArtistProfileAlreadyExists,
                || DomainError::UserNotFound(profile.user_id),
            )
        })?;

        Ok(())
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn update(&self, profile: &ArtistProfile) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE artist_profiles
            SET stage_name = $2, description = $3, is_verified = $4, followers = $5,
                rating = $6, updated_at = $7
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(profile.id)
        .bind(&profile.stage_name)
        .bind(&profile.description)
        .bind(profile.is_verified)
        .bind(profile.followers)
        .bind(profile.rating)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ArtistProfileNotFound(profile.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE artist_profiles SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ArtistProfileNotFound(id));
        }

        Ok(())
    }
}

#[async_trait]
impl ArtistProfileRepository for PgArtistProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<ArtistProfile>> {
        let result = sqlx::query_as::<_, ArtistProfileModel>(
            r"
            SELECT id, user_id, stage_name, description, is_verified, followers, rating,
                   created_at, updated_at
            FROM artist_profiles
            WHERE user_id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ArtistProfile::from))
    }
}
