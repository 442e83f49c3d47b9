//! Venue profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for venue_profiles table
///
/// The address is flattened into `address_*` columns; a row without an
/// `address_city` has no address.
#[derive(Debug, Clone, FromRow)]
pub struct VenueProfileModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub venue_type: i16,
    pub is_verified: bool,
    pub rating: f64,
    pub total_events: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address_street: Option<String>,
    pub address_number: Option<String>,
    pub address_complement: Option<String>,
    pub address_neighborhood: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip_code: Option<String>,
    pub address_country: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
