//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use setlist_core::entities::Event;
use setlist_core::error::DomainError;
use setlist_core::traits::{EventRepository, RepoResult, Store};
use setlist_core::value_objects::{EventStatus, StoredCode};

use crate::mappers::try_collect;
use crate::models::EventModel;

use super::error::{map_db_error, map_write_error};

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A missing parent on an event write is the creator, the artist or the venue
fn missing_parent(event: &Event) -> DomainError {
    match (event.artist_profile_id, event.venue_profile_id) {
        (None, None) => DomainError::UserNotFound(event.created_by_id),
        _ => DomainError::ValidationError(format!(
            "user {}, its artist profile or its venue profile does not exist",
            event.created_by_id
        )),
    }
}

#[async_trait]
impl Store<Event> for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, title, description, category, starts_at, ends_at, status, visibility,
                   total_capacity, created_by_id, artist_profile_id, venue_profile_id,
                   published_at, created_at, updated_at
            FROM events
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Event::try_from).transpose()
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Event>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, title, description, category, starts_at, ends_at, status, visibility,
                   total_capacity, created_by_id, artist_profile_id, venue_profile_id,
                   published_at, created_at, updated_at
            FROM events
            WHERE id = ANY($1) AND deleted_at IS NULL
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn create(&self, event: &Event) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO events (id, title, description, category, starts_at, ends_at, status,
                                visibility, total_capacity, created_by_id, artist_profile_id,
                                venue_profile_id, published_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ",
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.category.code())
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(event.status.code())
        .bind(event.visibility.code())
        .bind(event.total_capacity)
        .bind(event.created_by_id)
        .bind(event.artist_profile_id)
        .bind(event.venue_profile_id)
        .bind(event.published_at)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                |_| DomainError::DatabaseError("duplicate event id".to_string()),
                || missing_parent(event),
            )
        })?;

        Ok(())
    }

    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn update(&self, event: &Event) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET title = $2, description = $3, category = $4, starts_at = $5, ends_at = $6,
                status = $7, visibility = $8, total_capacity = $9, artist_profile_id = $10,
                venue_profile_id = $11, published_at = $12, updated_at = $13
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.category.code())
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(event.status.code())
        .bind(event.visibility.code())
        .bind(event.total_capacity)
        .bind(event.artist_profile_id)
        .bind(event.venue_profile_id)
        .bind(event.published_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                |_| DomainError::DatabaseError("duplicate event id".to_string()),
                || missing_parent(event),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EventNotFound(event.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE events SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EventNotFound(id));
        }

        Ok(())
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn list_upcoming(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, title, description, category, starts_at, ends_at, status, visibility,
                   total_capacity, created_by_id, artist_profile_id, venue_profile_id,
                   published_at, created_at, updated_at
            FROM events
            WHERE status = $1 AND starts_at >= $2 AND deleted_at IS NULL
            ORDER BY starts_at, id
            LIMIT $3
            ",
        )
        .bind(EventStatus::Published.code())
        .bind(now)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self))]
    async fn list_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, title, description, category, starts_at, ends_at, status, visibility,
                   total_capacity, created_by_id, artist_profile_id, venue_profile_id,
                   published_at, created_at, updated_at
            FROM events
            WHERE starts_at >= $1 AND starts_at <= $2 AND deleted_at IS NULL
            ORDER BY starts_at, id
            ",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self))]
    async fn list_by_venue(&self, venue_profile_id: Uuid) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, title, description, category, starts_at, ends_at, status, visibility,
                   total_capacity, created_by_id, artist_profile_id, venue_profile_id,
                   published_at, created_at, updated_at
            FROM events
            WHERE venue_profile_id = $1 AND deleted_at IS NULL
            ORDER BY starts_at, id
            ",
        )
        .bind(venue_profile_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }
}
