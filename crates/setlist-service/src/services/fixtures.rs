//! Seed data for service tests

use chrono::{Duration, Utc};
use setlist_core::entities::{Event, Genre, Song, User};
use setlist_core::traits::Store;
use setlist_core::value_objects::{EventCategory, UserRole};
use uuid::Uuid;

use super::context::ServiceContext;

pub async fn user(ctx: &ServiceContext, username: &str) -> User {
    let user = User::new(
        Uuid::new_v4(),
        format!("{username}@example.com"),
        username.to_string(),
        username.to_string(),
        "Tester".to_string(),
        UserRole::Audience,
    );
    ctx.user_repo().create(&user).await.unwrap();
    user
}

pub async fn genre(ctx: &ServiceContext, name: &str) -> Genre {
    let genre = Genre::new(Uuid::new_v4(), name.to_string());
    ctx.genre_repo().create(&genre).await.unwrap();
    genre
}

pub async fn song(ctx: &ServiceContext, genre: &Genre, title: &str) -> Song {
    let song = Song::new(Uuid::new_v4(), title.to_string(), "Various".to_string(), genre.id);
    ctx.song_repo().create(&song).await.unwrap();
    song
}

/// A published event starting tomorrow
pub async fn event(ctx: &ServiceContext, host: &User) -> Event {
    let mut event = Event::new(
        Uuid::new_v4(),
        "Karaoke Night".to_string(),
        EventCategory::Karaoke,
        Utc::now() + Duration::days(1),
        host.id,
    );
    event.publish();
    ctx.event_repo().create(&event).await.unwrap();
    event
}
