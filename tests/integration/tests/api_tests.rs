//! API Integration Tests
//!
//! Run against PostgreSQL by exporting `DATABASE_URL`; otherwise the server
//! uses the in-memory backend.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use integration_tests::{assert_json, assert_status, assert_text, fixtures::*, TestServer};
use reqwest::StatusCode;
use uuid::Uuid;

struct Stage {
    event_id: Uuid,
    song_id: Uuid,
    user_id: Uuid,
}

async fn stage(server: &TestServer) -> Stage {
    let user: Created = assert_json(
        server.post("/api/users", &CreateUser::unique()).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let genre: Created = assert_json(
        server.post("/api/genres", &CreateGenre::unique()).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let song: Created = assert_json(
        server
            .post("/api/songs", &CreateSong::in_genre(genre.id))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let event: Created = assert_json(
        server
            .post("/api/events", &CreateEvent::hosted_by(user.id))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    Stage {
        event_id: event.id,
        song_id: song.id,
        user_id: user.id,
    }
}

fn submission(stage: &Stage) -> SubmitRequest {
    SubmitRequest {
        event_id: stage.event_id,
        song_id: stage.song_id,
        requested_by_id: stage.user_id,
        message: Some("first dance".to_string()),
    }
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Song Request Tests
// ============================================================================

#[tokio::test]
async fn test_submit_song_request() {
    let server = TestServer::start().await.expect("Failed to start server");
    let stage = stage(&server).await;

    let response = server.post("/api/songrequests", &submission(&stage)).await.unwrap();
    let view: SongRequestView = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(view.event_id, stage.event_id);
    assert_eq!(view.song_id, stage.song_id);
    assert_eq!(view.requested_by_id, stage.user_id);
    assert_eq!(view.status, "pending");
    assert_eq!(view.votes, 0);
    assert_eq!(view.message.as_deref(), Some("first dance"));
    assert!(view.played_at.is_none());
}

#[tokio::test]
async fn test_duplicate_request_is_plain_text() {
    let server = TestServer::start().await.expect("Failed to start server");
    let stage = stage(&server).await;

    server.post("/api/songrequests", &submission(&stage)).await.unwrap();
    let response = server.post("/api/songrequests", &submission(&stage)).await.unwrap();

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = assert_text(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert!(content_type.starts_with("text/plain"));
    assert!(body.contains("already exists"));
}

#[tokio::test]
async fn test_concurrent_duplicates_admit_one() {
    let server = Arc::new(TestServer::start().await.expect("Failed to start server"));
    let stage = stage(&server).await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let server = Arc::clone(&server);
        let body = submission(&stage);
        handles.push(tokio::spawn(async move {
            server.post("/api/songrequests", &body).await.unwrap().status()
        }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::BAD_REQUEST => {}
            other => panic!("unexpected status {other}"),
        }
    }
    assert_eq!(created, 1);

    let listed: Vec<SongRequestView> = assert_json(
        server
            .get(&format!("/api/songrequests/event/{}", stage.event_id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_status_lifecycle() {
    let server = TestServer::start().await.expect("Failed to start server");
    let stage = stage(&server).await;

    let created: SongRequestView = assert_json(
        server.post("/api/songrequests", &submission(&stage)).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    let path = format!("/api/songrequests/{}/status", created.id);

    let accepted: SongRequestView = assert_json(
        server.patch(&path, &StatusChange::to("accepted")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(accepted.status, "accepted");

    let refused = server.patch(&path, &StatusChange::to("declined")).await.unwrap();
    let reason = assert_text(refused, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(reason, "cannot move a song request from accepted to declined");

    let played: SongRequestView = assert_json(
        server.patch(&path, &StatusChange::to("played")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(played.status, "played");
    assert!(played.played_at.is_some());
}

#[tokio::test]
async fn test_votes_rank_pending_requests() {
    let server = TestServer::start().await.expect("Failed to start server");
    let stage = stage(&server).await;

    let second_song: Created = {
        let genre: Created = assert_json(
            server.post("/api/genres", &CreateGenre::unique()).await.unwrap(),
            StatusCode::CREATED,
        )
        .await
        .unwrap();
        assert_json(
            server
                .post("/api/songs", &CreateSong::in_genre(genre.id))
                .await
                .unwrap(),
            StatusCode::CREATED,
        )
        .await
        .unwrap()
    };

    let first: SongRequestView = assert_json(
        server.post("/api/songrequests", &submission(&stage)).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    let second: SongRequestView = assert_json(
        server
            .post(
                "/api/songrequests",
                &SubmitRequest {
                    song_id: second_song.id,
                    message: None,
                    ..submission(&stage)
                },
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    for _ in 0..2 {
        server
            .post_empty(&format!("/api/songrequests/{}/votes", second.id))
            .await
            .unwrap();
    }

    let ranked: Vec<SongRequestView> = assert_json(
        server
            .get(&format!(
                "/api/songrequests/event/{}?pendingOnly=true",
                stage.event_id
            ))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].id, second.id);
    assert_eq!(ranked[0].votes, 2);
    assert_eq!(ranked[1].id, first.id);

    let floored: SongRequestView = {
        let path = format!("/api/songrequests/{}/votes", first.id);
        server.delete(&path).await.unwrap();
        assert_json(server.delete(&path).await.unwrap(), StatusCode::OK)
            .await
            .unwrap()
    };
    assert_eq!(floored.votes, 0);
}

// ============================================================================
// Error Envelope Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_references_are_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let stage = stage(&server).await;

    let body = SubmitRequest {
        event_id: Uuid::new_v4(),
        ..submission(&stage)
    };
    let envelope: ErrorEnvelope = assert_json(
        server.post("/api/songrequests", &body).await.unwrap(),
        StatusCode::NOT_FOUND,
    )
    .await
    .unwrap();
    assert_eq!(envelope.error.code, "UNKNOWN_EVENT");

    let envelope: ErrorEnvelope = assert_json(
        server
            .get(&format!("/api/songrequests/{}", Uuid::new_v4()))
            .await
            .unwrap(),
        StatusCode::NOT_FOUND,
    )
    .await
    .unwrap();
    assert_eq!(envelope.error.code, "UNKNOWN_SONG_REQUEST");
}

#[tokio::test]
async fn test_malformed_input_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let stage = stage(&server).await;

    let body = SubmitRequest {
        message: Some("x".repeat(501)),
        ..submission(&stage)
    };
    let envelope: ErrorEnvelope = assert_json(
        server.post("/api/songrequests", &body).await.unwrap(),
        StatusCode::BAD_REQUEST,
    )
    .await
    .unwrap();
    assert_eq!(envelope.error.code, "VALIDATION_ERROR");

    let envelope: ErrorEnvelope = assert_json(
        server.get("/api/events/not-a-uuid").await.unwrap(),
        StatusCode::BAD_REQUEST,
    )
    .await
    .unwrap();
    assert_eq!(envelope.error.code, "INVALID_PATH_PARAMETER");
    assert!(!envelope.error.message.is_empty());
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_user_lookup_by_email_is_case_insensitive() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = CreateUser::unique();
    let created: Created = assert_json(
        server.post("/api/users", &user).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let found: Created = assert_json(
        server
            .get(&format!("/api/users/email/{}", user.email))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(found.id, created.id);

    let duplicate = CreateUser {
        email: user.email.to_uppercase(),
        username: format!("other{}", unique_suffix()),
        ..CreateUser::unique()
    };
    let response = server.post("/api/users", &duplicate).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_song_lifecycle() {
    let server = TestServer::start().await.expect("Failed to start server");
    let genre: Created = assert_json(
        server.post("/api/genres", &CreateGenre::unique()).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    let song: Created = assert_json(
        server
            .post("/api/songs", &CreateSong::in_genre(genre.id))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let listed: Vec<Created> = assert_json(
        server
            .get(&format!("/api/songs/genre/{}?page=1&pageSize=10", genre.id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, song.id);

    let path = format!("/api/songs/{}", song.id);
    assert_status(server.delete(&path).await.unwrap(), StatusCode::NO_CONTENT)
        .await
        .unwrap();
    assert_status(server.get(&path).await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_events_in_range() {
    let server = TestServer::start().await.expect("Failed to start server");
    let stage = stage(&server).await;

    let start = chrono::Utc::now();
    let end = start + chrono::Duration::days(7);
    let url = reqwest::Url::parse_with_params(
        &format!("{}/api/events/date-range", server.base_url()),
        &[
            ("startDate", start.to_rfc3339()),
            ("endDate", end.to_rfc3339()),
        ],
    )
    .unwrap();

    let events: Vec<Created> = assert_json(
        server.client.get(url).send().await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(events.iter().any(|e| e.id == stage.event_id));
}
