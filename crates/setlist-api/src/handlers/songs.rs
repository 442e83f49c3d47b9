//! Song catalog handlers

use axum::{extract::State, Json};
use serde::Deserialize;
use setlist_service::dto::{CreateSongRequest, SongResponse, UpdateSongRequest};
use setlist_service::SongService;
use uuid::Uuid;

use crate::extractors::{ApiPath, ApiQuery, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CountQuery {
    pub count: Option<i64>,
}

/// POST /api/songs
pub async fn create_song(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateSongRequest>,
) -> ApiResult<Created<Json<SongResponse>>> {
    let service = SongService::new(state.service_context());
    let response = service.create_song(request).await?;
    Ok(Created(Json(response)))
}

/// GET /api/songs/{song_id}
pub async fn get_song(
    State(state): State<AppState>,
    ApiPath(song_id): ApiPath<Uuid>,
) -> ApiResult<Json<SongResponse>> {
    let service = SongService::new(state.service_context());
    Ok(Json(service.get_song(song_id).await?))
}

/// PUT /api/songs/{song_id}
pub async fn update_song(
    State(state): State<AppState>,
    ApiPath(song_id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateSongRequest>,
) -> ApiResult<Json<SongResponse>> {
    let service = SongService::new(state.service_context());
    Ok(Json(service.update_song(song_id, request).await?))
}

/// DELETE /api/songs/{song_id}
pub async fn delete_song(
    State(state): State<AppState>,
    ApiPath(song_id): ApiPath<Uuid>,
) -> ApiResult<NoContent> {
    let service = SongService::new(state.service_context());
    service.delete_song(song_id).await?;
    Ok(NoContent)
}

/// GET /api/songs/genre/{genre_id}?page=&pageSize=
pub async fn list_by_genre(
    State(state): State<AppState>,
    ApiPath(genre_id): ApiPath<Uuid>,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<SongResponse>>> {
    let service = SongService::new(state.service_context());
    Ok(Json(service.list_by_genre(genre_id, page).await?))
}

/// GET /api/songs/search?query=
pub async fn search_songs(
    State(state): State<AppState>,
    ApiQuery(search): ApiQuery<SearchQuery>,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<SongResponse>>> {
    let service = SongService::new(state.service_context());
    Ok(Json(service.search(&search.query, page).await?))
}

/// GET /api/songs/popular?count=
pub async fn popular_songs(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CountQuery>,
) -> ApiResult<Json<Vec<SongResponse>>> {
    let service = SongService::new(state.service_context());
    Ok(Json(service.popular(query.count).await?))
}
