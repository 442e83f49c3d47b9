//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use setlist_core::value_objects::{
    EventCategory, EventVisibility, SongDifficulty, SongRequestStatus, UserRole, VenueType,
};

// ============================================================================
// Song Request Requests
// ============================================================================

/// Ask for a song at an event
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSongRequest {
    pub event_id: Uuid,
    pub song_id: Uuid,
    pub requested_by_id: Uuid,

    #[validate(length(max = 500, message = "Message must be at most 500 characters"))]
    pub message: Option<String>,
}

/// Move a song request to another status
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestStatus {
    pub status: SongRequestStatus,
}

// ============================================================================
// User Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"), length(max = 255))]
    pub email: String,

    #[validate(length(min = 2, max = 50, message = "Username must be 2-50 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[serde(default)]
    pub role: UserRole,

    #[validate(length(max = 20, message = "Phone number must be at most 20 characters"))]
    pub phone_number: Option<String>,
}

/// Profile fields a user can change; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 20, message = "Phone number must be at most 20 characters"))]
    pub phone_number: Option<String>,

    pub bio: Option<String>,

    pub avatar: Option<String>,
}

// ============================================================================
// Catalog Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGenreRequest {
    #[validate(length(min = 1, max = 100, message = "Genre name must be 1-100 characters"))]
    pub name: String,

    /// `#RRGGBB`; defaults to black
    pub color: Option<String>,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSongRequest {
    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Artist must be 1-200 characters"))]
    pub artist: String,

    pub genre_id: Uuid,

    /// `mm:ss`
    pub duration: Option<String>,

    #[serde(default)]
    pub difficulty: SongDifficulty,

    #[validate(length(max = 10, message = "Key must be at most 10 characters"))]
    pub key: Option<String>,

    pub lyrics: Option<String>,

    pub notes: Option<String>,

    #[validate(range(min = 1000, max = 9999, message = "Year must have four digits"))]
    pub year: Option<i32>,

    #[serde(default)]
    pub is_popular: bool,
}

/// Song fields to change; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSongRequest {
    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Artist must be 1-200 characters"))]
    pub artist: Option<String>,

    pub genre_id: Option<Uuid>,

    pub duration: Option<String>,

    pub difficulty: Option<SongDifficulty>,

    #[validate(length(max = 10, message = "Key must be at most 10 characters"))]
    pub key: Option<String>,

    pub lyrics: Option<String>,

    pub notes: Option<String>,

    #[validate(range(min = 1000, max = 9999, message = "Year must have four digits"))]
    pub year: Option<i32>,

    pub is_popular: Option<bool>,
}

// ============================================================================
// Artist Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtistProfileRequest {
    pub user_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Stage name must be 1-200 characters"))]
    pub stage_name: String,

    #[serde(default)]
    pub description: String,
}

// ============================================================================
// Venue Requests
// ============================================================================

/// Street address, shared by venue requests and responses
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VenueAddressBody {
    #[serde(default)]
    pub street: String,

    #[serde(default)]
    pub number: String,

    pub complement: Option<String>,

    #[serde(default)]
    pub neighborhood: String,

    #[validate(length(min = 1, max = 100, message = "City must be 1-100 characters"))]
    pub city: String,

    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub zip_code: String,

    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    "Brasil".to_string()
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVenueProfileRequest {
    pub user_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Capacity cannot be negative"))]
    pub capacity: i32,

    #[serde(default)]
    pub venue_type: VenueType,

    #[validate(length(max = 40))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(url(message = "Invalid website URL"))]
    pub website: Option<String>,

    #[validate(nested)]
    pub address: Option<VenueAddressBody>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepertoireRequest {
    pub artist_profile_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[serde(default)]
    pub is_active: bool,

    /// Initial songs in performance order
    #[serde(default)]
    pub song_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddRepertoireSongsRequest {
    #[validate(length(min = 1, message = "At least one song is required"))]
    pub song_ids: Vec<Uuid>,
}

// ============================================================================
// Event Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub category: EventCategory,

    pub starts_at: DateTime<Utc>,

    pub ends_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub visibility: EventVisibility,

    #[serde(default)]
    #[validate(range(min = 0, message = "Capacity cannot be negative"))]
    pub total_capacity: i32,

    pub created_by_id: Uuid,

    pub artist_profile_id: Option<Uuid>,

    pub venue_profile_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_song_request_camel_case() {
        let body = serde_json::json!({
            "eventId": Uuid::new_v4(),
            "songId": Uuid::new_v4(),
            "requestedById": Uuid::new_v4(),
            "message": "birthday song please"
        });
        let request: SubmitSongRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.message.as_deref(), Some("birthday song please"));
    }

    #[test]
    fn test_submit_song_request_message_limit() {
        let mut request = SubmitSongRequest {
            event_id: Uuid::new_v4(),
            song_id: Uuid::new_v4(),
            requested_by_id: Uuid::new_v4(),
            message: Some("x".repeat(500)),
        };
        assert!(request.validate().is_ok());

        request.message = Some("x".repeat(501));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_status_values_are_snake_case() {
        let body: UpdateRequestStatus =
            serde_json::from_str(r#"{"status":"accepted"}"#).unwrap();
        assert_eq!(body.status, SongRequestStatus::Accepted);

        assert!(serde_json::from_str::<UpdateRequestStatus>(r#"{"status":"Accepted"}"#).is_err());
    }

    #[test]
    fn test_create_user_defaults_role() {
        let request: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "email": "ana@example.com",
            "username": "ana",
            "firstName": "Ana",
            "lastName": "Silva"
        }))
        .unwrap();
        assert_eq!(request.role, UserRole::Audience);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_user_rejects_bad_email() {
        let request = CreateUserRequest {
            email: "not-an-email".to_string(),
            username: "ana".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            role: UserRole::Audience,
            phone_number: None,
        };
        assert!(request.validate().is_err());
    }
}
