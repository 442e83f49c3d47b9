//! Venue profile - the host side of a user account

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::traits::Entity;
use crate::value_objects::VenueType;

/// Street address of a venue
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VenueAddress {
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Place that hosts events, at most one per user
#[derive(Debug, Clone, PartialEq)]
pub struct VenueProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub venue_type: VenueType,
    pub is_verified: bool,
    pub rating: f64,
    pub total_events: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<VenueAddress>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VenueProfile {
    pub fn new(id: Uuid, user_id: Uuid, name: String, venue_type: VenueType) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            name,
            description: String::new(),
            capacity: 0,
            venue_type,
            is_verified: false,
            rating: 0.0,
            total_events: 0,
            phone: None,
            email: None,
            website: None,
            address: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the seating capacity; negative values are rejected
    pub fn set_capacity(&mut self, capacity: i32) -> Result<(), DomainError> {
        if capacity < 0 {
            return Err(DomainError::ValidationError(
                "venue capacity cannot be negative".to_string(),
            ));
        }
        self.capacity = capacity;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Whether the venue sits in `city`, ignoring case
    pub fn is_in_city(&self, city: &str) -> bool {
        self.address
            .as_ref()
            .is_some_and(|address| address.city.to_lowercase() == city.trim().to_lowercase())
    }
}

impl Entity for VenueProfile {
    type Id = Uuid;
    const NAME: &'static str = "venue profile";

    fn id(&self) -> Uuid {
        self.id
    }

    fn not_found(id: Uuid) -> DomainError {
        DomainError::VenueProfileNotFound(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue() -> VenueProfile {
        VenueProfile::new(Uuid::new_v4(), Uuid::new_v4(), "Bar do Zé".to_string(), VenueType::Bar)
    }

    #[test]
    fn test_capacity_cannot_be_negative() {
        let mut venue = venue();
        assert!(venue.set_capacity(-1).is_err());
        assert_eq!(venue.capacity, 0);
        assert!(venue.set_capacity(120).is_ok());
        assert_eq!(venue.capacity, 120);
    }

    #[test]
    fn test_city_match_ignores_case() {
        let mut venue = venue();
        assert!(!venue.is_in_city("Recife"));

        venue.address = Some(VenueAddress {
            city: "Recife".to_string(),
            ..VenueAddress::default()
        });
        assert!(venue.is_in_city("recife"));
        assert!(venue.is_in_city(" RECIFE "));
        assert!(!venue.is_in_city("Olinda"));
    }
}
