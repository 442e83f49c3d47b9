//! SongRequest entity <-> model mapper

use setlist_core::entities::SongRequest;
use setlist_core::error::DomainError;

use crate::models::SongRequestModel;
use crate::repositories::decode_code;

impl TryFrom<SongRequestModel> for SongRequest {
    type Error = DomainError;

    fn try_from(model: SongRequestModel) -> Result<Self, Self::Error> {
        Ok(SongRequest {
            id: model.id,
            event_id: model.event_id,
            song_id: model.song_id,
            requested_by_id: model.requested_by_id,
            status: decode_code(model.status)?,
            message: model.message,
            votes: model.votes,
            created_at: model.created_at,
            updated_at: model.updated_at,
            played_at: model.played_at,
        })
    }
}
