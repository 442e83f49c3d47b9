//! Artist profile entity <-> model mapper

use setlist_core::entities::ArtistProfile;

use crate::models::ArtistProfileModel;

impl From<ArtistProfileModel> for ArtistProfile {
    fn from(model: ArtistProfileModel) -> Self {
        ArtistProfile {
            id: model.id,
            user_id: model.user_id,
            stage_name: model.stage_name,
            description: model.description,
            is_verified: model.is_verified,
            followers: model.followers,
            rating: model.rating,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
