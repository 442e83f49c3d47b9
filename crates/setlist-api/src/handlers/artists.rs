//! Artist profile handlers

use axum::{extract::State, Json};
use setlist_service::dto::{ArtistProfileResponse, CreateArtistProfileRequest};
use setlist_service::ArtistService;
use uuid::Uuid;

use crate::extractors::{ApiPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /api/artists
pub async fn create_profile(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateArtistProfileRequest>,
) -> ApiResult<Created<Json<ArtistProfileResponse>>> {
    let service = ArtistService::new(state.service_context());
    let response = service.create_profile(request).await?;
    Ok(Created(Json(response)))
}

/// GET /api/artists/{profile_id}
pub async fn get_profile(
    State(state): State<AppState>,
    ApiPath(profile_id): ApiPath<Uuid>,
) -> ApiResult<Json<ArtistProfileResponse>> {
    let service = ArtistService::new(state.service_context());
    Ok(Json(service.get_profile(profile_id).await?))
}
