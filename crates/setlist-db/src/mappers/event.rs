//! Event entity <-> model mapper

use setlist_core::entities::Event;
use setlist_core::error::DomainError;

use crate::models::EventModel;
use crate::repositories::decode_code;

impl TryFrom<EventModel> for Event {
    type Error = DomainError;

    fn try_from(model: EventModel) -> Result<Self, Self::Error> {
        Ok(Event {
            id: model.id,
            title: model.title,
            description: model.description,
            category: decode_code(model.category)?,
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            status: decode_code(model.status)?,
            visibility: decode_code(model.visibility)?,
            total_capacity: model.total_capacity,
            created_by_id: model.created_by_id,
            artist_profile_id: model.artist_profile_id,
            venue_profile_id: model.venue_profile_id,
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
