//! Test fixtures and data generators
//!
//! Names carry a random tag so runs against a shared database do not collide
//! on unique columns.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl CreateUser {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("fan{suffix}@example.com"),
            username: format!("fan{suffix}"),
            first_name: "Test".to_string(),
            last_name: "Fan".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateGenre {
    pub name: String,
    pub color: Option<String>,
}

impl CreateGenre {
    pub fn unique() -> Self {
        Self {
            name: format!("Genre {}", unique_suffix()),
            color: Some("#1db954".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSong {
    pub title: String,
    pub artist: String,
    pub genre_id: Uuid,
    pub duration: Option<String>,
}

impl CreateSong {
    pub fn in_genre(genre_id: Uuid) -> Self {
        Self {
            title: format!("Song {}", unique_suffix()),
            artist: "House Band".to_string(),
            genre_id,
            duration: Some("3:45".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub title: String,
    pub category: String,
    pub starts_at: DateTime<Utc>,
    pub created_by_id: Uuid,
}

impl CreateEvent {
    pub fn hosted_by(user_id: Uuid) -> Self {
        Self {
            title: format!("Karaoke night {}", unique_suffix()),
            category: "karaoke".to_string(),
            starts_at: Utc::now() + Duration::days(2),
            created_by_id: user_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub event_id: Uuid,
    pub song_id: Uuid,
    pub requested_by_id: Uuid,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusChange {
    pub status: String,
}

impl StatusChange {
    pub fn to(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}

/// Any created resource; only the id is needed to chain calls
#[derive(Debug, Deserialize)]
pub struct Created {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongRequestView {
    pub id: Uuid,
    pub event_id: Uuid,
    pub song_id: Uuid,
    pub requested_by_id: Uuid,
    pub status: String,
    pub message: Option<String>,
    pub votes: i32,
    pub played_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
