//! PostgreSQL implementation of SongRequestRepository
//!
//! The partial unique index `song_requests_event_song_requester_key` is the
//! authority on duplicate requests: two racing inserts for the same
//! `(event, song, requester)` leave exactly one row, and the loser is
//! reported as [`DomainError::DuplicateRequest`].

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use setlist_core::entities::SongRequest;
use setlist_core::error::DomainError;
use setlist_core::traits::{RepoResult, SongRequestRepository, Store};
use setlist_core::value_objects::{SongRequestStatus, StoredCode};

use crate::mappers::try_collect;
use crate::models::SongRequestModel;

use super::error::{map_db_error, map_write_error};

/// PostgreSQL implementation of SongRequestRepository
#[derive(Clone)]
pub struct PgSongRequestRepository {
    pool: PgPool,
}

impl PgSongRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Which parent a foreign key violation on `song_requests` refers to
fn missing_parent(request: &SongRequest, constraint: Option<&str>) -> DomainError {
    match constraint {
        Some(c) if c.contains("song_id") => DomainError::SongNotFound(request.song_id),
        Some(c) if c.contains("requested_by_id") => DomainError::UserNotFound(request.requested_by_id),
        _ => DomainError::EventNotFound(request.event_id),
    }
}

#[async_trait]
impl Store<SongRequest> for PgSongRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<SongRequest>> {
        let result = sqlx::query_as::<_, SongRequestModel>(
            r"
            SELECT id, event_id, song_id, requested_by_id, status, message, votes,
                   created_at, updated_at, played_at
            FROM song_requests
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(SongRequest::try_from).transpose()
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<SongRequest>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, SongRequestModel>(
            r"
            SELECT id, event_id, song_id, requested_by_id, status, message, votes,
                   created_at, updated_at, played_at
            FROM song_requests
            WHERE id = ANY($1) AND deleted_at IS NULL
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self, request), fields(request_id = %request.id, event_id = %request.event_id))]
    async fn create(&self, request: &SongRequest) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO song_requests (id, event_id, song_id, requested_by_id, status, message,
                                       votes, created_at, updated_at, played_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(request.id)
        .bind(request.event_id)
        .bind(request.song_id)
        .bind(request.requested_by_id)
        .bind(request.status.code())
        .bind(&request.message)
        .bind(request.votes)
        .bind(request.created_at)
        .bind(request.updated_at)
        .bind(request.played_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let constraint = e
                .as_database_error()
                .and_then(|db| db.constraint())
                .map(str::to_owned);
            map_write_error(
                e,
                |_| DomainError::DuplicateRequest,
                || missing_parent(request, constraint.as_deref()),
            )
        })?;

        Ok(())
    }

    /// Rewrites message, votes and status fields unconditionally. Status
    /// changes that must respect concurrent writers go through
    /// [`SongRequestRepository::update_status`].
    #[instrument(skip(self, request), fields(request_id = %request.id))]
    async fn update(&self, request: &SongRequest) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE song_requests
            SET status = $2, message = $3, votes = $4, updated_at = $5, played_at = $6
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(request.id)
        .bind(request.status.code())
        .bind(&request.message)
        .bind(request.votes)
        .bind(request.updated_at)
        .bind(request.played_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SongRequestNotFound(request.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE song_requests SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SongRequestNotFound(id));
        }

        Ok(())
    }
}

#[async_trait]
impl SongRequestRepository for PgSongRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_event_song_user(
        &self,
        event_id: Uuid,
        song_id: Uuid,
        requested_by_id: Uuid,
    ) -> RepoResult<Option<SongRequest>> {
        let result = sqlx::query_as::<_, SongRequestModel>(
            r"
            SELECT id, event_id, song_id, requested_by_id, status, message, votes,
                   created_at, updated_at, played_at
            FROM song_requests
            WHERE event_id = $1 AND song_id = $2 AND requested_by_id = $3
              AND deleted_at IS NULL
            ",
        )
        .bind(event_id)
        .bind(song_id)
        .bind(requested_by_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(SongRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_event(&self, event_id: Uuid) -> RepoResult<Vec<SongRequest>> {
        let results = sqlx::query_as::<_, SongRequestModel>(
            r"
            SELECT id, event_id, song_id, requested_by_id, status, message, votes,
                   created_at, updated_at, played_at
            FROM song_requests
            WHERE event_id = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC, id
            ",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self))]
    async fn list_pending_by_event(&self, event_id: Uuid) -> RepoResult<Vec<SongRequest>> {
        let results = sqlx::query_as::<_, SongRequestModel>(
            r"
            SELECT id, event_id, song_id, requested_by_id, status, message, votes,
                   created_at, updated_at, played_at
            FROM song_requests
            WHERE event_id = $1 AND status = $2 AND deleted_at IS NULL
            ORDER BY votes DESC, created_at DESC, id
            ",
        )
        .bind(event_id)
        .bind(SongRequestStatus::Pending.code())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: Uuid) -> RepoResult<Vec<SongRequest>> {
        let results = sqlx::query_as::<_, SongRequestModel>(
            r"
            SELECT id, event_id, song_id, requested_by_id, status, message, votes,
                   created_at, updated_at, played_at
            FROM song_requests
            WHERE requested_by_id = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC, id
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self, request), fields(request_id = %request.id, to = %request.status))]
    async fn update_status(&self, request: &SongRequest, expected: SongRequestStatus) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE song_requests
            SET status = $2, updated_at = $3, played_at = $4
            WHERE id = $1 AND status = $5 AND deleted_at IS NULL
            ",
        )
        .bind(request.id)
        .bind(request.status.code())
        .bind(request.updated_at)
        .bind(request.played_at)
        .bind(expected.code())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn increment_vote(&self, id: Uuid) -> RepoResult<i32> {
        let votes: Option<(i32,)> = sqlx::query_as(
            r"
            UPDATE song_requests
            SET votes = votes + 1, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING votes
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        votes
            .map(|(v,)| v)
            .ok_or(DomainError::SongRequestNotFound(id))
    }

    #[instrument(skip(self))]
    async fn decrement_vote(&self, id: Uuid) -> RepoResult<i32> {
        let votes: Option<(i32,)> = sqlx::query_as(
            r"
            UPDATE song_requests
            SET votes = GREATEST(votes - 1, 0), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING votes
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        votes
            .map(|(v,)| v)
            .ok_or(DomainError::SongRequestNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SongRequest {
        SongRequest::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), None)
            .unwrap()
    }

    #[test]
    fn test_missing_parent_picks_referenced_table() {
        let req = request();

        assert!(matches!(
            missing_parent(&req, Some("song_requests_song_id_fkey")),
            DomainError::SongNotFound(id) if id == req.song_id
        ));
        assert!(matches!(
            missing_parent(&req, Some("song_requests_requested_by_id_fkey")),
            DomainError::UserNotFound(id) if id == req.requested_by_id
        ));
        assert!(matches!(
            missing_parent(&req, Some("song_requests_event_id_fkey")),
            DomainError::EventNotFound(id) if id == req.event_id
        ));
    }
}
