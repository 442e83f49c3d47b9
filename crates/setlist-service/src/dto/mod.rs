//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Projections from domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AddRepertoireSongsRequest, CreateArtistProfileRequest, CreateEventRequest, CreateGenreRequest,
    CreateRepertoireRequest, CreateSongRequest, CreateUserRequest, SubmitSongRequest,
    CreateVenueProfileRequest, UpdateRequestStatus, UpdateSongRequest, UpdateUserRequest,
    VenueAddressBody,
};

pub use responses::{
    ArtistProfileResponse, EventResponse, GenreResponse, HealthChecks, HealthResponse,
    ReadinessResponse, RepertoireResponse, SongRequestResponse, SongResponse, StorageCheck,
    UserResponse, UserSummaryResponse, VenueProfileResponse,
};

pub use mappers::{distinct_ids, index_by_id, song_responses, RequestLookups};
