//! Route definitions
//!
//! All API routes organized by resource and mounted under /api.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{
    artists, events, genres, health, repertoires, song_requests, songs, users, venues,
};
use crate::response::ApiError;
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .fallback(|| async { ApiError::RouteNotFound })
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(song_request_routes())
        .merge(user_routes())
        .merge(catalog_routes())
        .merge(artist_routes())
        .merge(venue_routes())
        .merge(event_routes())
}

/// Song request routes
fn song_request_routes() -> Router<AppState> {
    Router::new()
        .route("/songrequests", post(song_requests::create_request))
        .route("/songrequests/event/:event_id", get(song_requests::list_by_event))
        .route("/songrequests/user/:user_id", get(song_requests::list_by_user))
        .route("/songrequests/:request_id", get(song_requests::get_request))
        .route("/songrequests/:request_id/status", patch(song_requests::update_status))
        .route(
            "/songrequests/:request_id/votes",
            post(song_requests::upvote).delete(song_requests::remove_vote),
        )
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/users/email/:email", get(users::get_user_by_email))
        .route("/users/:user_id", get(users::get_user).put(users::update_user))
}

/// Genre and song routes
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/genres", get(genres::list_genres).post(genres::create_genre))
        .route("/songs", post(songs::create_song))
        .route("/songs/search", get(songs::search_songs))
        .route("/songs/popular", get(songs::popular_songs))
        .route("/songs/genre/:genre_id", get(songs::list_by_genre))
        .route(
            "/songs/:song_id",
            get(songs::get_song).put(songs::update_song).delete(songs::delete_song),
        )
}

/// Artist profile and repertoire routes
fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", post(artists::create_profile))
        .route("/artists/:profile_id", get(artists::get_profile))
        .route("/repertoires", post(repertoires::create_repertoire))
        .route(
            "/repertoires/artist/:artist_profile_id",
            get(repertoires::list_by_artist),
        )
        .route(
            "/repertoires/:repertoire_id/songs",
            get(repertoires::get_repertoire_songs).post(repertoires::add_songs),
        )
        .route(
            "/repertoires/:repertoire_id/songs/:song_id",
            delete(repertoires::remove_song),
        )
}

/// Venue profile routes
fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", post(venues::create_profile))
        .route("/venues/user/:user_id", get(venues::get_by_user))
        .route("/venues/city/:city", get(venues::list_by_city))
        .route("/venues/:profile_id", get(venues::get_profile))
        .route("/venues/:profile_id/events", get(venues::list_events))
}

/// Event routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(events::create_event))
        .route("/events/upcoming", get(events::upcoming_events))
        .route("/events/date-range", get(events::events_in_range))
        .route("/events/:event_id", get(events::get_event))
}
