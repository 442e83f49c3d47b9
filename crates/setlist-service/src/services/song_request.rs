//! Song request service
//!
//! Admission (one request per event, song and requester), the status
//! lifecycle and vote counting. Storage stays behind
//! [`SongRequestRepository`](setlist_core::traits::SongRequestRepository);
//! the rules live here.

use setlist_core::entities::{validate_message, SongRequest};
use setlist_core::error::DomainError;
use setlist_core::traits::Store;
use setlist_core::value_objects::SongRequestStatus;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::dto::{index_by_id, RequestLookups, SongRequestResponse, SubmitSongRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::projection::project_requests;

/// Direction of a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

/// Song request service
pub struct SongRequestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SongRequestService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Admit a new request
    ///
    /// The event, song and requester must exist. A second request for the
    /// same song at the same event by the same user fails with
    /// `DuplicateRequest`, including when two arrive at once.
    #[instrument(skip(self, request), fields(event_id = %request.event_id, song_id = %request.song_id))]
    pub async fn create_request(&self, request: SubmitSongRequest) -> ServiceResult<SongRequestResponse> {
        if let Some(message) = &request.message {
            validate_message(message)?;
        }

        let event = self.ctx.event_repo().get(request.event_id).await?;
        let song = self.ctx.song_repo().get(request.song_id).await?;
        let requester = self.ctx.user_repo().get(request.requested_by_id).await?;

        let existing = self
            .ctx
            .song_request_repo()
            .find_by_event_song_user(event.id, song.id, requester.id)
            .await?;
        if existing.is_some() {
            debug!(requester_id = %requester.id, "Request already exists");
            return Err(DomainError::DuplicateRequest.into());
        }

        let song_request = SongRequest::new(
            Uuid::new_v4(),
            event.id,
            song.id,
            requester.id,
            request.message,
        )?;
        self.ctx.song_request_repo().create(&song_request).await?;

        info!(request_id = %song_request.id, requester_id = %requester.id, "Song request created");

        let genre = self.ctx.genre_repo().find_by_id(song.genre_id).await?;
        let lookups = RequestLookups {
            songs: index_by_id(vec![song], |s| s.id),
            genres: index_by_id(genre.into_iter().collect(), |g| g.id),
            users: index_by_id(vec![requester], |u| u.id),
        };
        Ok(SongRequestResponse::new(&song_request, &lookups))
    }

    /// Requests for an event
    ///
    /// With `pending_only`, only pending requests ranked by votes then
    /// recency; otherwise every request, newest first. An unknown event
    /// simply has no requests.
    #[instrument(skip(self))]
    pub async fn list_by_event(
        &self,
        event_id: Uuid,
        pending_only: bool,
    ) -> ServiceResult<Vec<SongRequestResponse>> {
        let repo = self.ctx.song_request_repo();
        let requests = if pending_only {
            repo.list_pending_by_event(event_id).await?
        } else {
            repo.list_by_event(event_id).await?
        };

        project_requests(self.ctx, &requests).await
    }

    /// Requests made by a user, newest first
    #[instrument(skip(self))]
    pub async fn list_by_user(&self, user_id: Uuid) -> ServiceResult<Vec<SongRequestResponse>> {
        let requests = self.ctx.song_request_repo().list_by_user(user_id).await?;
        project_requests(self.ctx, &requests).await
    }

    #[instrument(skip(self))]
    pub async fn get_request(&self, request_id: Uuid) -> ServiceResult<SongRequestResponse> {
        let request = self.ctx.song_request_repo().get(request_id).await?;
        self.project_one(request).await
    }

    /// Move a request along its lifecycle
    ///
    /// The write only lands if nobody changed the status since it was
    /// read; a lost race reports the transition from the status now stored.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        request_id: Uuid,
        status: SongRequestStatus,
    ) -> ServiceResult<SongRequestResponse> {
        let repo = self.ctx.song_request_repo();
        let mut request = repo.get(request_id).await?;
        let previous = request.transition_to(status)?;

        if !repo.update_status(&request, previous).await? {
            let current = repo.get(request_id).await?;
            warn!(
                from = %previous,
                now = %current.status,
                to = %status,
                "Status changed concurrently"
            );
            return Err(DomainError::InvalidTransition {
                from: current.status,
                to: status,
            }
            .into());
        }

        info!(from = %previous, to = %status, "Song request status updated");
        self.project_one(request).await
    }

    /// Add or remove one vote
    #[instrument(skip(self))]
    pub async fn vote(&self, request_id: Uuid, direction: VoteDirection) -> ServiceResult<SongRequestResponse> {
        let repo = self.ctx.song_request_repo();
        let votes = match direction {
            VoteDirection::Up => repo.increment_vote(request_id).await?,
            VoteDirection::Down => repo.decrement_vote(request_id).await?,
        };
        debug!(votes, "Vote recorded");

        let request = repo.get(request_id).await?;
        self.project_one(request).await
    }

    async fn project_one(&self, request: SongRequest) -> ServiceResult<SongRequestResponse> {
        let mut views = project_requests(self.ctx, std::slice::from_ref(&request)).await?;
        Ok(views
            .pop()
            .unwrap_or_else(|| SongRequestResponse::new(&request, &RequestLookups::default())))
    }
}
