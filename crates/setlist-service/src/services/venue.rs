//! Venue profile service

use setlist_core::entities::{VenueAddress, VenueProfile};
use setlist_core::error::DomainError;
use setlist_core::traits::Store;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateVenueProfileRequest, EventResponse, VenueProfileResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct VenueService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VenueService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Give a user a venue profile; a user has at most one
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn create_profile(
        &self,
        request: CreateVenueProfileRequest,
    ) -> ServiceResult<VenueProfileResponse> {
        let user = self.ctx.user_repo().get(request.user_id).await?;

        if self.ctx.venue_repo().find_by_user(user.id).await?.is_some() {
            return Err(DomainError::VenueProfileAlreadyExists.into());
        }

        let mut venue = VenueProfile::new(
            Uuid::new_v4(),
            user.id,
            request.name.trim().to_string(),
            request.venue_type,
        );
        venue.set_capacity(request.capacity)?;
        venue.description = request.description;
        venue.phone = request.phone;
        venue.email = request.email.map(|e| e.trim().to_lowercase());
        venue.website = request.website;
        venue.address = request.address.map(VenueAddress::from);

        self.ctx.venue_repo().create(&venue).await?;
        info!(venue_profile_id = %venue.id, "Venue profile created");

        Ok(VenueProfileResponse::from(&venue))
    }

    #[instrument(skip(self))]
    pub async fn get_profile(&self, profile_id: Uuid) -> ServiceResult<VenueProfileResponse> {
        let venue = self.ctx.venue_repo().get(profile_id).await?;
        Ok(VenueProfileResponse::from(&venue))
    }

    #[instrument(skip(self))]
    pub async fn get_by_user(&self, user_id: Uuid) -> ServiceResult<VenueProfileResponse> {
        let venue = self
            .ctx
            .venue_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Venue profile for user", user_id))?;
        Ok(VenueProfileResponse::from(&venue))
    }

    /// Venues in a city, best rated first
    #[instrument(skip(self))]
    pub async fn list_by_city(&self, city: &str) -> ServiceResult<Vec<VenueProfileResponse>> {
        if city.trim().is_empty() {
            return Err(ServiceError::validation("city must not be blank"));
        }

        let venues = self.ctx.venue_repo().list_by_city(city).await?;
        Ok(venues.iter().map(VenueProfileResponse::from).collect())
    }

    /// Events hosted at a venue, soonest first; an unknown venue is a 404
    #[instrument(skip(self))]
    pub async fn events(&self, profile_id: Uuid) -> ServiceResult<Vec<EventResponse>> {
        let venue = self.ctx.venue_repo().get(profile_id).await?;
        let events = self.ctx.event_repo().list_by_venue(venue.id).await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use setlist_core::value_objects::VenueType;

    use super::*;
    use crate::dto::VenueAddressBody;
    use crate::services::fixtures;

    fn create(user_id: Uuid, city: &str) -> CreateVenueProfileRequest {
        CreateVenueProfileRequest {
            user_id,
            name: " Bar do Zé ".to_string(),
            description: "Samba on Thursdays".to_string(),
            capacity: 120,
            venue_type: VenueType::Bar,
            phone: None,
            email: Some("Contato@BarDoZe.com".to_string()),
            website: None,
            address: Some(VenueAddressBody {
                street: "Rua da Aurora".to_string(),
                number: "12".to_string(),
                complement: Some("  ".to_string()),
                neighborhood: "Boa Vista".to_string(),
                city: city.to_string(),
                state: "PE".to_string(),
                zip_code: "50050-000".to_string(),
                country: "Brasil".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn test_one_profile_per_user() {
        let ctx = ServiceContext::in_memory();
        let owner = fixtures::user(&ctx, "ze").await;
        let service = VenueService::new(&ctx);

        let venue = service.create_profile(create(owner.id, "Recife")).await.unwrap();
        assert_eq!(venue.name, "Bar do Zé");
        assert_eq!(venue.email.as_deref(), Some("contato@bardoze.com"));
        let address = venue.address.as_ref().unwrap();
        assert_eq!(address.city, "Recife");
        assert!(address.complement.is_none());

        assert_eq!(service.get_profile(venue.id).await.unwrap().user_id, owner.id);
        assert_eq!(service.get_by_user(owner.id).await.unwrap().id, venue.id);

        let err = service.create_profile(create(owner.id, "Recife")).await.unwrap_err();
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "VENUE_PROFILE_EXISTS");
    }

    #[tokio::test]
    async fn test_profile_needs_user_and_valid_capacity() {
        let ctx = ServiceContext::in_memory();
        let owner = fixtures::user(&ctx, "ze").await;
        let service = VenueService::new(&ctx);

        let err = service
            .create_profile(create(Uuid::new_v4(), "Recife"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_USER");

        let mut request = create(owner.id, "Recife");
        request.capacity = -5;
        let err = service.create_profile(request).await.unwrap_err();
        assert_eq!(err.status_code(), 400);

        let err = service.get_profile(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_VENUE");
        assert_eq!(service.get_by_user(owner.id).await.unwrap_err().status_code(), 404);
    }

    #[tokio::test]
    async fn test_list_by_city() {
        let ctx = ServiceContext::in_memory();
        let service = VenueService::new(&ctx);
        for (tag, city) in [("a", "Recife"), ("b", "recife"), ("c", "Olinda")] {
            let owner = fixtures::user(&ctx, tag).await;
            service.create_profile(create(owner.id, city)).await.unwrap();
        }

        assert_eq!(service.list_by_city("RECIFE").await.unwrap().len(), 2);
        assert!(service.list_by_city("Natal").await.unwrap().is_empty());
        assert_eq!(service.list_by_city("  ").await.unwrap_err().status_code(), 400);
    }
}
