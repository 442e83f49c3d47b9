//! Repertoire handlers

use axum::{extract::State, Json};
use serde::Deserialize;
use setlist_service::dto::{AddRepertoireSongsRequest, CreateRepertoireRequest, RepertoireResponse};
use setlist_service::RepertoireService;
use uuid::Uuid;

use crate::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRepertoiresQuery {
    #[serde(default)]
    pub active_only: bool,
}

/// POST /api/repertoires
pub async fn create_repertoire(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateRepertoireRequest>,
) -> ApiResult<Created<Json<RepertoireResponse>>> {
    let service = RepertoireService::new(state.service_context());
    let response = service.create_repertoire(request).await?;
    Ok(Created(Json(response)))
}

/// GET /api/repertoires/{repertoire_id}/songs
pub async fn get_repertoire_songs(
    State(state): State<AppState>,
    ApiPath(repertoire_id): ApiPath<Uuid>,
) -> ApiResult<Json<RepertoireResponse>> {
    let service = RepertoireService::new(state.service_context());
    Ok(Json(service.get_repertoire(repertoire_id).await?))
}

/// POST /api/repertoires/{repertoire_id}/songs
pub async fn add_songs(
    State(state): State<AppState>,
    ApiPath(repertoire_id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<AddRepertoireSongsRequest>,
) -> ApiResult<Json<RepertoireResponse>> {
    let service = RepertoireService::new(state.service_context());
    Ok(Json(service.add_songs(repertoire_id, request).await?))
}

/// DELETE /api/repertoires/{repertoire_id}/songs/{song_id}
pub async fn remove_song(
    State(state): State<AppState>,
    ApiPath((repertoire_id, song_id)): ApiPath<(Uuid, Uuid)>,
) -> ApiResult<NoContent> {
    let service = RepertoireService::new(state.service_context());
    service.remove_song(repertoire_id, song_id).await?;
    Ok(NoContent)
}

/// GET /api/repertoires/artist/{artist_profile_id}?activeOnly=bool
pub async fn list_by_artist(
    State(state): State<AppState>,
    ApiPath(artist_profile_id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<ArtistRepertoiresQuery>,
) -> ApiResult<Json<Vec<RepertoireResponse>>> {
    let service = RepertoireService::new(state.service_context());
    Ok(Json(service.list_by_artist(artist_profile_id, query.active_only).await?))
}
