//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase
//! field names. IDs are serialized as UUID strings.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use setlist_core::value_objects::{
    EventCategory, EventStatus, EventVisibility, SongDifficulty, SongRequestStatus, UserRole,
    VenueType,
};

use super::requests::VenueAddressBody;

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Public view of a user, embedded in other responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub avatar: Option<String>,
}

// ============================================================================
// Catalog Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreResponse {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongResponse {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    /// Absent when the genre has been removed from the catalog
    pub genre: Option<GenreResponse>,
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    pub difficulty: SongDifficulty,
    pub key: Option<String>,
    pub has_lyrics: bool,
    pub lyrics: Option<String>,
    pub notes: Option<String>,
    pub year: Option<i32>,
    pub is_popular: bool,
}

// ============================================================================
// Artist Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfileResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub stage_name: String,
    pub description: String,
    pub is_verified: bool,
    pub followers: i32,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueProfileResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub venue_type: VenueType,
    pub is_verified: bool,
    pub rating: f64,
    pub total_events: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<VenueAddressBody>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepertoireResponse {
    pub id: Uuid,
    pub artist_profile_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    /// Songs in performance order
    pub songs: Vec<SongResponse>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Event Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub status: EventStatus,
    pub visibility: EventVisibility,
    pub total_capacity: i32,
    pub created_by_id: Uuid,
    pub artist_profile_id: Option<Uuid>,
    pub venue_profile_id: Option<Uuid>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Song Request Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongRequestResponse {
    pub id: Uuid,
    pub event_id: Uuid,
    pub song_id: Uuid,
    /// Absent when the song has been removed from the catalog
    pub song: Option<SongResponse>,
    pub requested_by_id: Uuid,
    pub requested_by: Option<UserSummaryResponse>,
    pub status: SongRequestStatus,
    pub message: Option<String>,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub played_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: StorageCheck,
}

#[derive(Debug, Clone, Serialize)]
pub struct StorageCheck {
    pub backend: String,
    pub status: String,
}

impl ReadinessResponse {
    pub fn ready(backend: &str, storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: StorageCheck {
                    backend: backend.to_string(),
                    status: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
                },
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy("0.1.0");
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, "0.1.0");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready("memory", true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.storage.backend, "memory");

        let not_ready = ReadinessResponse::ready("postgres", false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.storage.status, "unhealthy");
    }

    #[test]
    fn test_song_request_serializes_camel_case() {
        let now = Utc::now();
        let response = SongRequestResponse {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            song_id: Uuid::new_v4(),
            song: None,
            requested_by_id: Uuid::new_v4(),
            requested_by: None,
            status: SongRequestStatus::Pending,
            message: None,
            votes: 2,
            created_at: now,
            updated_at: now,
            played_at: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["votes"], 2);
        assert!(json.get("eventId").is_some());
        assert!(json.get("playedAt").is_some());
    }
}
