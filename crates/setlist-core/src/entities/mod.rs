//! Domain entities - core business objects

mod artist;
mod event;
mod genre;
mod repertoire;
mod song;
mod song_request;
mod user;
mod venue;

pub use artist::ArtistProfile;
pub use event::Event;
pub use genre::{is_hex_color, Genre};
pub use repertoire::Repertoire;
pub use song::{parse_duration, Song};
pub use song_request::{validate_message, SongRequest, MAX_MESSAGE_LENGTH};
pub use user::User;
pub use venue::{VenueAddress, VenueProfile};
