//! Business logic services
//!
//! Each service borrows a [`ServiceContext`] for the duration of a call and
//! owns the rules for one part of the system; repositories only store.

pub mod artist;
pub mod context;
pub mod error;
pub mod event;
pub mod genre;
pub mod projection;
pub mod repertoire;
pub mod song;
pub mod song_request;
pub mod user;
pub mod venue;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export all services for convenience
pub use artist::ArtistService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::{EventService, DEFAULT_UPCOMING_COUNT};
pub use genre::GenreService;
pub use repertoire::RepertoireService;
pub use song::{SongService, DEFAULT_POPULAR_COUNT, MAX_COUNT};
pub use song_request::{SongRequestService, VoteDirection};
pub use user::UserService;
pub use venue::VenueService;
