//! Venue profile entity <-> model mapper

use setlist_core::entities::{VenueAddress, VenueProfile};
use setlist_core::error::DomainError;

use crate::models::VenueProfileModel;
use crate::repositories::decode_code;

impl TryFrom<VenueProfileModel> for VenueProfile {
    type Error = DomainError;

    fn try_from(model: VenueProfileModel) -> Result<Self, Self::Error> {
        let address = model.address_city.map(|city| VenueAddress {
            street: model.address_street.unwrap_or_default(),
            number: model.address_number.unwrap_or_default(),
            complement: model.address_complement,
            neighborhood: model.address_neighborhood.unwrap_or_default(),
            city,
            state: model.address_state.unwrap_or_default(),
            zip_code: model.address_zip_code.unwrap_or_default(),
            country: model.address_country.unwrap_or_default(),
        });

        Ok(VenueProfile {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            description: model.description,
            capacity: model.capacity,
            venue_type: decode_code(model.venue_type)?,
            is_verified: model.is_verified,
            rating: model.rating,
            total_events: model.total_events,
            phone: model.phone,
            email: model.email,
            website: model.website,
            address,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
