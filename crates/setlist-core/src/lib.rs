//! # setlist-core
//!
//! Domain layer containing entities, the song request lifecycle, and the
//! storage traits the infrastructure implements.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    is_hex_color, parse_duration, validate_message, ArtistProfile, Event, Genre, Repertoire, Song,
    SongRequest, User, VenueAddress, VenueProfile, MAX_MESSAGE_LENGTH,
};
pub use error::DomainError;
pub use traits::{
    ArtistProfileRepository, Entity, EventRepository, GenreRepository, PageRequest,
    RepertoireRepository, RepoResult, SongRepository, SongRequestRepository, StorageHealth, Store,
    UserRepository, VenueProfileRepository,
};
pub use value_objects::{
    EventCategory, EventStatus, EventVisibility, SongDifficulty, SongRequestStatus, StoredCode,
    UserRole, VenueType,
};
