//! Database models - SQLx-compatible structs for PostgreSQL tables

mod artist;
mod event;
mod genre;
mod repertoire;
mod song;
mod song_request;
mod user;
mod venue;

pub use artist::ArtistProfileModel;
pub use event::EventModel;
pub use genre::GenreModel;
pub use repertoire::{RepertoireModel, RepertoireSongModel};
pub use song::SongModel;
pub use song_request::SongRequestModel;
pub use user::UserModel;
pub use venue::VenueProfileModel;
