//! Venue profile handlers

use axum::{extract::State, Json};
use setlist_service::dto::{CreateVenueProfileRequest, EventResponse, VenueProfileResponse};
use setlist_service::VenueService;
use uuid::Uuid;

use crate::extractors::{ApiPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /api/venues
pub async fn create_profile(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateVenueProfileRequest>,
) -> ApiResult<Created<Json<VenueProfileResponse>>> {
    let service = VenueService::new(state.service_context());
    let response = service.create_profile(request).await?;
    Ok(Created(Json(response)))
}

/// GET /api/venues/{profile_id}
pub async fn get_profile(
    State(state): State<AppState>,
    ApiPath(profile_id): ApiPath<Uuid>,
) -> ApiResult<Json<VenueProfileResponse>> {
    let service = VenueService::new(state.service_context());
    Ok(Json(service.get_profile(profile_id).await?))
}

/// GET /api/venues/user/{user_id}
pub async fn get_by_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> ApiResult<Json<VenueProfileResponse>> {
    let service = VenueService::new(state.service_context());
    Ok(Json(service.get_by_user(user_id).await?))
}

/// GET /api/venues/city/{city}
pub async fn list_by_city(
    State(state): State<AppState>,
    ApiPath(city): ApiPath<String>,
) -> ApiResult<Json<Vec<VenueProfileResponse>>> {
    let service = VenueService::new(state.service_context());
    Ok(Json(service.list_by_city(&city).await?))
}

/// GET /api/venues/{profile_id}/events
pub async fn list_events(
    State(state): State<AppState>,
    ApiPath(profile_id): ApiPath<Uuid>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = VenueService::new(state.service_context());
    Ok(Json(service.events(profile_id).await?))
}
