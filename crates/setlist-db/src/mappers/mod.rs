//! Entity to model mappers
//!
//! Conversions from database rows (`models`) to domain entities (setlist-core).
//! Rows carrying enum codes use `TryFrom` because an unknown code is a
//! decode failure, not a default.

mod artist;
mod event;
mod genre;
mod repertoire;
mod song;
mod song_request;
mod user;
mod venue;

pub use repertoire::{repertoire_with_songs, repertoires_with_songs};

use setlist_core::error::DomainError;

/// Convert a batch of rows with a fallible mapper
pub fn try_collect<M, E>(models: Vec<M>) -> Result<Vec<E>, DomainError>
where
    E: TryFrom<M, Error = DomainError>,
{
    models.into_iter().map(E::try_from).collect()
}
