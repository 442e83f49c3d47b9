//! Artist profile service

use setlist_core::entities::ArtistProfile;
use setlist_core::error::DomainError;
use setlist_core::traits::Store;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{ArtistProfileResponse, CreateArtistProfileRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ArtistService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ArtistService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Give a user a performer profile; a user has at most one
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn create_profile(
        &self,
        request: CreateArtistProfileRequest,
    ) -> ServiceResult<ArtistProfileResponse> {
        let user = self.ctx.user_repo().get(request.user_id).await?;

        if self.ctx.artist_repo().find_by_user(user.id).await?.is_some() {
            return Err(DomainError::ArtistProfileAlreadyExists.into());
        }

        let profile = ArtistProfile::new(
            Uuid::new_v4(),
            user.id,
            request.stage_name.trim().to_string(),
            request.description,
        );
        self.ctx.artist_repo().create(&profile).await?;
        info!(artist_profile_id = %profile.id, "Artist profile created");

        Ok(ArtistProfileResponse::from(&profile))
    }

    #[instrument(skip(self))]
    pub async fn get_profile(&self, profile_id: Uuid) -> ServiceResult<ArtistProfileResponse> {
        let profile = self.ctx.artist_repo().get(profile_id).await?;
        Ok(ArtistProfileResponse::from(&profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures;

    fn create(user_id: Uuid) -> CreateArtistProfileRequest {
        CreateArtistProfileRequest {
            user_id,
            stage_name: "  Banda Lua ".to_string(),
            description: "Friday residency".to_string(),
        }
    }

    #[tokio::test]
    async fn test_one_profile_per_user() {
        let ctx = ServiceContext::in_memory();
        let user = fixtures::user(&ctx, "lua").await;
        let service = ArtistService::new(&ctx);

        let profile = service.create_profile(create(user.id)).await.unwrap();
        assert_eq!(profile.stage_name, "Banda Lua");
        assert!(!profile.is_verified);
        assert_eq!(service.get_profile(profile.id).await.unwrap().user_id, user.id);

        let err = service.create_profile(create(user.id)).await.unwrap_err();
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_profile_needs_user() {
        let ctx = ServiceContext::in_memory();
        let service = ArtistService::new(&ctx);

        let err = service.create_profile(create(Uuid::new_v4())).await.unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_USER");
        assert_eq!(service.get_profile(Uuid::new_v4()).await.unwrap_err().status_code(), 404);
    }
}
