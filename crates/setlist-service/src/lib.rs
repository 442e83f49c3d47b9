//! # setlist-service
//!
//! Application layer containing the song request workflow, the catalog and
//! event services, and the DTOs they exchange with the API.

pub mod dto;
pub mod services;

pub use services::{
    ArtistService, EventService, GenreService, RepertoireService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SongRequestService, SongService,
    UserService, VenueService, VoteDirection,
};
