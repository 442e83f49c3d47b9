//! PostgreSQL implementation of VenueProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use setlist_core::entities::{VenueAddress, VenueProfile};
use setlist_core::error::DomainError;
use setlist_core::traits::{RepoResult, Store, VenueProfileRepository};
use setlist_core::value_objects::StoredCode;

use crate::mappers::try_collect;
use crate::models::VenueProfileModel;

use super::error::{map_db_error, map_write_error};

/// PostgreSQL implementation of VenueProfileRepository
#[derive(Clone)]
pub struct PgVenueProfileRepository {
    pool: PgPool,
}

impl PgVenueProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn address_field<'a>(
    profile: &'a VenueProfile,
    field: impl FnOnce(&'a VenueAddress) -> &'a str,
) -> Option<&'a str> {
    profile.address.as_ref().map(field)
}

#[async_trait]
impl Store<VenueProfile> for PgVenueProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<VenueProfile>> {
        let result = sqlx::query_as::<_, VenueProfileModel>(
            r"
            SELECT id, user_id, name, description, capacity, venue_type, is_verified, rating,
                   total_events, phone, email, website, address_street, address_number,
                   address_complement, address_neighborhood, address_city, address_state,
                   address_zip_code, address_country, created_at, updated_at
            FROM venue_profiles
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(VenueProfile::try_from).transpose()
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<VenueProfile>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, VenueProfileModel>(
            r"
            SELECT id, user_id, name, description, capacity, venue_type, is_verified, rating,
                   total_events, phone, email, website, address_street, address_number,
                   address_complement, address_neighborhood, address_city, address_state,
                   address_zip_code, address_country, created_at, updated_at
            FROM venue_profiles
            WHERE id = ANY($1) AND deleted_at IS NULL
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn create(&self, profile: &VenueProfile) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO venue_profiles (id, user_id, name, description, capacity, venue_type,
                                        is_verified, rating, total_events, phone, email, website,
                                        address_street, address_number, address_complement,
                                        address_neighborhood, address_city, address_state,
                                        address_zip_code, address_country, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                    $18, $19, $20, $21, $22)
            ",
        )
        .bind(profile.id)
        .bind(profile.user_id)
        .bind(&profile.name)
        .bind(&profile.description)
        .bind(profile.capacity)
        .bind(profile.venue_type.code())
        .bind(profile.is_verified)
        .bind(profile.rating)
        .bind(profile.total_events)
        .bind(&profile.phone)
        .bind(&profile.email)
        .bind(&profile.website)
        .bind(address_field(profile, |a| &a.street))
        .bind(address_field(profile, |a| &a.number))
        .bind(profile.address.as_ref().and_then(|a| a.complement.as_deref()))
        .bind(address_field(profile, |a| &a.neighborhood))
        .bind(address_field(profile, |a| &a.city))
        .bind(address_field(profile, |a| &a.state))
        .bind(address_field(profile, |a| &a.zip_code))
        .bind(address_field(profile, |a| &a.country))
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                |_| DomainError::VenueProfileAlreadyExists,
                || DomainError::UserNotFound(profile.user_id),
            )
        })?;

        Ok(())
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn update(&self, profile: &VenueProfile) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE venue_profiles
            SET name = $2, description = $3, capacity = $4, venue_type = $5, is_verified = $6,
                rating = $7, total_events = $8, phone = $9, email = $10, website = $11,
                address_street = $12, address_number = $13, address_complement = $14,
                address_neighborhood = $15, address_city = $16, address_state = $17,
                address_zip_code = $18, address_country = $19, updated_at = $20
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(profile.id)
        .bind(&profile.name)
        .bind(&profile.description)
        .bind(profile.capacity)
        .bind(profile.venue_type.code())
        .bind(profile.is_verified)
        .bind(profile.rating)
        .bind(profile.total_events)
        .bind(&profile.phone)
        .bind(&profile.email)
        .bind(&profile.website)
        .bind(address_field(profile, |a| &a.street))
        .bind(address_field(profile, |a| &a.number))
        .bind(profile.address.as_ref().and_then(|a| a.complement.as_deref()))
        .bind(address_field(profile, |a| &a.neighborhood))
        .bind(address_field(profile, |a| &a.city))
        .bind(address_field(profile, |a| &a.state))
        .bind(address_field(profile, |a| &a.zip_code))
        .bind(address_field(profile, |a| &a.country))
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::VenueProfileNotFound(profile.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE venue_profiles SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::VenueProfileNotFound(id));
        }

        Ok(())
    }
}

#[async_trait]
impl VenueProfileRepository for PgVenueProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<VenueProfile>> {
        let result = sqlx::query_as::<_, VenueProfileModel>(
            r"
            SELECT id, user_id, name, description, capacity, venue_type, is_verified, rating,
                   total_events, phone, email, website, address_street, address_number,
                   address_complement, address_neighborhood, address_city, address_state,
                   address_zip_code, address_country, created_at, updated_at
            FROM venue_profiles
            WHERE user_id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(VenueProfile::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_city(&self, city: &str) -> RepoResult<Vec<VenueProfile>> {
        let results = sqlx::query_as::<_, VenueProfileModel>(
            r"
            SELECT id, user_id, name, description, capacity, venue_type, is_verified, rating,
                   total_events, phone, email, website, address_street, address_number,
                   address_complement, address_neighborhood, address_city, address_state,
                   address_zip_code, address_country, created_at, updated_at
            FROM venue_profiles
            WHERE LOWER(address_city) = LOWER($1) AND deleted_at IS NULL
            ORDER BY rating DESC, name, id
            ",
        )
        .bind(city.trim())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }
}
