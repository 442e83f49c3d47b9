//! Genre handlers

use axum::{extract::State, Json};
use setlist_service::dto::{CreateGenreRequest, GenreResponse};
use setlist_service::GenreService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/genres
pub async fn list_genres(State(state): State<AppState>) -> ApiResult<Json<Vec<GenreResponse>>> {
    let service = GenreService::new(state.service_context());
    Ok(Json(service.list_genres().await?))
}

/// POST /api/genres
pub async fn create_genre(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateGenreRequest>,
) -> ApiResult<Created<Json<GenreResponse>>> {
    let service = GenreService::new(state.service_context());
    let response = service.create_genre(request).await?;
    Ok(Created(Json(response)))
}
