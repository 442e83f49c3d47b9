//! Event service
//!
//! Events are published as soon as they are created, so they show up in
//! the upcoming listing right away.

use chrono::{DateTime, Utc};
use setlist_core::entities::Event;
use setlist_core::traits::Store;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateEventRequest, EventResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::song::MAX_COUNT;

/// Default number of upcoming events returned
pub const DEFAULT_UPCOMING_COUNT: i64 = 10;

pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_event(&self, request: CreateEventRequest) -> ServiceResult<EventResponse> {
        let creator = self.ctx.user_repo().get(request.created_by_id).await?;
        if let Some(artist_id) = request.artist_profile_id {
            self.ctx.artist_repo().get(artist_id).await?;
        }
        if let Some(venue_id) = request.venue_profile_id {
            self.ctx.venue_repo().get(venue_id).await?;
        }

        let mut event = Event::new(
            Uuid::new_v4(),
            request.title.trim().to_string(),
            request.category,
            request.starts_at,
            creator.id,
        );
        event.set_ends_at(request.ends_at)?;
        event.description = request.description;
        event.visibility = request.visibility;
        event.total_capacity = request.total_capacity;
        event.artist_profile_id = request.artist_profile_id;
        event.venue_profile_id = request.venue_profile_id;
        event.publish();

        self.ctx.event_repo().create(&event).await?;
        info!(event_id = %event.id, starts_at = %event.starts_at, "Event created");

        Ok(EventResponse::from(&event))
    }

    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: Uuid) -> ServiceResult<EventResponse> {
        let event = self.ctx.event_repo().get(event_id).await?;
        Ok(EventResponse::from(&event))
    }

    /// Published events that have not started, soonest first
    #[instrument(skip(self))]
    pub async fn upcoming(&self, count: Option<i64>) -> ServiceResult<Vec<EventResponse>> {
        let limit = count.unwrap_or(DEFAULT_UPCOMING_COUNT).clamp(1, MAX_COUNT);
        let events = self.ctx.event_repo().list_upcoming(Utc::now(), limit).await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }

    /// Events starting within `[start, end]`, soonest first
    #[instrument(skip(self))]
    pub async fn date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ServiceResult<Vec<EventResponse>> {
        if start > end {
            return Err(ServiceError::validation("startDate must not be after endDate"));
        }

        let events = self.ctx.event_repo().list_between(start, end).await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }
}
