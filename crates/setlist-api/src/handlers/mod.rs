//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod artists;
pub mod events;
pub mod genres;
pub mod health;
pub mod repertoires;
pub mod song_requests;
pub mod songs;
pub mod users;
pub mod venues;
