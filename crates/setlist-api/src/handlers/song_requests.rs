//! Song request handlers
//!
//! Submission, listing, status changes and voting.

use axum::{extract::State, Json};
use serde::Deserialize;
use setlist_service::dto::{SongRequestResponse, SubmitSongRequest, UpdateRequestStatus};
use setlist_service::{SongRequestService, VoteDirection};
use uuid::Uuid;

use crate::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequestsQuery {
    #[serde(default)]
    pub pending_only: bool,
}

/// Submit a song request
///
/// POST /api/songrequests
pub async fn create_request(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitSongRequest>,
) -> ApiResult<Created<Json<SongRequestResponse>>> {
    let service = SongRequestService::new(state.service_context());
    let response = service.create_request(request).await?;
    Ok(Created(Json(response)))
}

/// Requests for an event
///
/// GET /api/songrequests/event/{event_id}?pendingOnly=bool
pub async fn list_by_event(
    State(state): State<AppState>,
    ApiPath(event_id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<EventRequestsQuery>,
) -> ApiResult<Json<Vec<SongRequestResponse>>> {
    let service = SongRequestService::new(state.service_context());
    let response = service.list_by_event(event_id, query.pending_only).await?;
    Ok(Json(response))
}

/// Requests made by a user
///
/// GET /api/songrequests/user/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> ApiResult<Json<Vec<SongRequestResponse>>> {
    let service = SongRequestService::new(state.service_context());
    let response = service.list_by_user(user_id).await?;
    Ok(Json(response))
}

/// GET /api/songrequests/{id}
pub async fn get_request(
    State(state): State<AppState>,
    ApiPath(request_id): ApiPath<Uuid>,
) -> ApiResult<Json<SongRequestResponse>> {
    let service = SongRequestService::new(state.service_context());
    let response = service.get_request(request_id).await?;
    Ok(Json(response))
}

/// Move a request along its lifecycle
///
/// PATCH /api/songrequests/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    ApiPath(request_id): ApiPath<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdateRequestStatus>,
) -> ApiResult<Json<SongRequestResponse>> {
    let service = SongRequestService::new(state.service_context());
    let response = service.update_status(request_id, body.status).await?;
    Ok(Json(response))
}

/// POST /api/songrequests/{id}/votes
pub async fn upvote(
    State(state): State<AppState>,
    ApiPath(request_id): ApiPath<Uuid>,
) -> ApiResult<Json<SongRequestResponse>> {
    let service = SongRequestService::new(state.service_context());
    let response = service.vote(request_id, VoteDirection::Up).await?;
    Ok(Json(response))
}

/// DELETE /api/songrequests/{id}/votes
pub async fn remove_vote(
    State(state): State<AppState>,
    ApiPath(request_id): ApiPath<Uuid>,
) -> ApiResult<Json<SongRequestResponse>> {
    let service = SongRequestService::new(state.service_context());
    let response = service.vote(request_id, VoteDirection::Down).await?;
    Ok(Json(response))
}
