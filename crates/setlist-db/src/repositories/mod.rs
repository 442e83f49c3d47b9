//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in setlist-core.
//! Each repository handles database operations for a specific domain entity.

mod artist;
mod error;
mod event;
mod genre;
mod repertoire;
mod song;
mod song_request;
mod user;
mod venue;

pub use artist::PgArtistProfileRepository;
pub use error::{decode_code, map_db_error, map_unique_violation, map_write_error};
pub use event::PgEventRepository;
pub use genre::PgGenreRepository;
pub use repertoire::PgRepertoireRepository;
pub use song::PgSongRepository;
pub use song_request::PgSongRequestRepository;
pub use user::PgUserRepository;
pub use venue::PgVenueProfileRepository;
