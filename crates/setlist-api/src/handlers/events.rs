//! Event handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use setlist_service::dto::{CreateEventRequest, EventResponse};
use setlist_service::EventService;
use uuid::Uuid;

use crate::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::handlers::songs::CountQuery;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Created<Json<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let response = service.create_event(request).await?;
    Ok(Created(Json(response)))
}

/// GET /api/events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    ApiPath(event_id): ApiPath<Uuid>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    Ok(Json(service.get_event(event_id).await?))
}

/// GET /api/events/upcoming?count=
pub async fn upcoming_events(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CountQuery>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    Ok(Json(service.upcoming(query.count).await?))
}

/// GET /api/events/date-range?startDate=&endDate=
pub async fn events_in_range(
    State(state): State<AppState>,
    ApiQuery(range): ApiQuery<DateRangeQuery>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    Ok(Json(service.date_range(range.start_date, range.end_date).await?))
}
