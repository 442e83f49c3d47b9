//! Entity to DTO projections
//!
//! Single-entity views are plain `From` conversions. Views that embed other
//! entities take lookup tables built from one bulk load per collaborator, so
//! projecting a list never queries per row.

use std::collections::HashMap;

use setlist_core::entities::{
    ArtistProfile, Event, Genre, Repertoire, Song, SongRequest, User, VenueAddress, VenueProfile,
};
use uuid::Uuid;

use super::requests::VenueAddressBody;
use super::responses::{
    ArtistProfileResponse, EventResponse, GenreResponse, RepertoireResponse, SongRequestResponse,
    SongResponse, UserResponse, UserSummaryResponse, VenueProfileResponse,
};

/// Index entities by their id
pub fn index_by_id<T, F>(items: Vec<T>, id: F) -> HashMap<Uuid, T>
where
    F: Fn(&T) -> Uuid,
{
    items.into_iter().map(|item| (id(&item), item)).collect()
}

/// Unique ids, first occurrence order
pub fn distinct_ids<T, F>(items: &[T], id: F) -> Vec<Uuid>
where
    F: Fn(&T) -> Uuid,
{
    let mut ids: Vec<Uuid> = Vec::with_capacity(items.len());
    for item in items {
        let id = id(item);
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

// ============================================================================
// Users
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            full_name: user.full_name(),
            phone_number: user.phone_number.clone(),
            bio: user.bio.clone(),
            avatar: user.avatar.clone(),
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for UserSummaryResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            full_name: user.full_name(),
            avatar: user.avatar.clone(),
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

impl From<&Genre> for GenreResponse {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name.clone(),
            color: genre.color.clone(),
            description: genre.description.clone(),
        }
    }
}

impl SongResponse {
    pub fn new(song: &Song, genre: Option<&Genre>) -> Self {
        Self {
            id: song.id,
            title: song.title.clone(),
            artist: song.artist.clone(),
            genre: genre.map(GenreResponse::from),
            duration: song.duration.clone(),
            duration_seconds: song.duration_seconds(),
            difficulty: song.difficulty,
            key: song.key.clone(),
            has_lyrics: song.has_lyrics,
            lyrics: song.lyrics.clone(),
            notes: song.notes.clone(),
            year: song.year,
            is_popular: song.is_popular,
        }
    }
}

/// Project songs, keeping their order
pub fn song_responses(songs: &[Song], genres: &HashMap<Uuid, Genre>) -> Vec<SongResponse> {
    songs
        .iter()
        .map(|song| SongResponse::new(song, genres.get(&song.genre_id)))
        .collect()
}

// ============================================================================
// Artists
// ============================================================================

impl From<&ArtistProfile> for ArtistProfileResponse {
    fn from(profile: &ArtistProfile) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            stage_name: profile.stage_name.clone(),
            description: profile.description.clone(),
            is_verified: profile.is_verified,
            followers: profile.followers,
            rating: profile.rating,
            created_at: profile.created_at,
        }
    }
}

// ============================================================================
// Venues
// ============================================================================

impl From<&VenueAddress> for VenueAddressBody {
    fn from(address: &VenueAddress) -> Self {
        Self {
            street: address.street.clone(),
            number: address.number.clone(),
            complement: address.complement.clone(),
            neighborhood: address.neighborhood.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip_code: address.zip_code.clone(),
            country: address.country.clone(),
        }
    }
}

impl From<VenueAddressBody> for VenueAddress {
    fn from(body: VenueAddressBody) -> Self {
        Self {
            street: body.street.trim().to_string(),
            number: body.number.trim().to_string(),
            complement: body.complement.filter(|c| !c.trim().is_empty()),
            neighborhood: body.neighborhood.trim().to_string(),
            city: body.city.trim().to_string(),
            state: body.state.trim().to_string(),
            zip_code: body.zip_code.trim().to_string(),
            country: body.country.trim().to_string(),
        }
    }
}

impl From<&VenueProfile> for VenueProfileResponse {
    fn from(venue: &VenueProfile) -> Self {
        Self {
            id: venue.id,
            user_id: venue.user_id,
            name: venue.name.clone(),
            description: venue.description.clone(),
            capacity: venue.capacity,
            venue_type: venue.venue_type,
            is_verified: venue.is_verified,
            rating: venue.rating,
            total_events: venue.total_events,
            phone: venue.phone.clone(),
            email: venue.email.clone(),
            website: venue.website.clone(),
            address: venue.address.as_ref().map(VenueAddressBody::from),
            created_at: venue.created_at,
        }
    }
}

impl RepertoireResponse {
    /// Songs follow the repertoire's order; ids missing from `songs` are skipped
    pub fn new(
        repertoire: &Repertoire,
        songs: &HashMap<Uuid, Song>,
        genres: &HashMap<Uuid, Genre>,
    ) -> Self {
        let ordered: Vec<SongResponse> = repertoire
            .song_ids
            .iter()
            .filter_map(|id| songs.get(id))
            .map(|song| SongResponse::new(song, genres.get(&song.genre_id)))
            .collect();

        Self {
            id: repertoire.id,
            artist_profile_id: repertoire.artist_profile_id,
            name: repertoire.name.clone(),
            description: repertoire.description.clone(),
            is_active: repertoire.is_active,
            songs: ordered,
            created_at: repertoire.created_at,
        }
    }
}

// ============================================================================
// Events
// ============================================================================

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
            category: event.category,
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            status: event.status,
            visibility: event.visibility,
            total_capacity: event.total_capacity,
            created_by_id: event.created_by_id,
            artist_profile_id: event.artist_profile_id,
            venue_profile_id: event.venue_profile_id,
            published_at: event.published_at,
            created_at: event.created_at,
        }
    }
}

// ============================================================================
// Song requests
// ============================================================================

/// Everything a song request view embeds
#[derive(Debug, Default)]
pub struct RequestLookups {
    pub songs: HashMap<Uuid, Song>,
    pub genres: HashMap<Uuid, Genre>,
    pub users: HashMap<Uuid, User>,
}

impl SongRequestResponse {
    pub fn new(request: &SongRequest, lookups: &RequestLookups) -> Self {
        let song = lookups
            .songs
            .get(&request.song_id)
            .map(|song| SongResponse::new(song, lookups.genres.get(&song.genre_id)));

        Self {
            id: request.id,
            event_id: request.event_id,
            song_id: request.song_id,
            song,
            requested_by_id: request.requested_by_id,
            requested_by: lookups
                .users
                .get(&request.requested_by_id)
                .map(UserSummaryResponse::from),
            status: request.status,
            message: request.message.clone(),
            votes: request.votes,
            created_at: request.created_at,
            updated_at: request.updated_at,
            played_at: request.played_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use setlist_core::value_objects::UserRole;

    use super::*;

    #[test]
    fn test_distinct_ids_keeps_first_occurrence() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(distinct_ids(&[a, b, a, b], |id| *id), vec![a, b]);
    }

    #[test]
    fn test_repertoire_keeps_song_order() {
        let genre = Genre::new(Uuid::new_v4(), "MPB".to_string());
        let first = Song::new(Uuid::new_v4(), "Zanzibar".to_string(), "A".to_string(), genre.id);
        let second = Song::new(Uuid::new_v4(), "Alvorada".to_string(), "B".to_string(), genre.id);

        let mut repertoire = Repertoire::new(Uuid::new_v4(), Uuid::new_v4(), "Set".to_string());
        repertoire.append_songs(&[first.id, Uuid::new_v4(), second.id]);

        let songs = index_by_id(vec![second.clone(), first.clone()], |s| s.id);
        let genres = index_by_id(vec![genre.clone()], |g| g.id);
        let response = RepertoireResponse::new(&repertoire, &songs, &genres);

        let titles: Vec<&str> = response.songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Zanzibar", "Alvorada"]);
        assert_eq!(response.songs[0].genre.as_ref().map(|g| g.name.as_str()), Some("MPB"));
    }

    #[test]
    fn test_song_request_embeds_song_and_requester() {
        let genre = Genre::new(Uuid::new_v4(), "Rock".to_string());
        let song = Song::new(Uuid::new_v4(), "Creep".to_string(), "Radiohead".to_string(), genre.id);
        let user = User::new(
            Uuid::new_v4(),
            "thom@example.com".to_string(),
            "thom".to_string(),
            "Thom".to_string(),
            "Yorke".to_string(),
            UserRole::Audience,
        );
        let request =
            SongRequest::new(Uuid::new_v4(), Uuid::new_v4(), song.id, user.id, None).unwrap();

        let lookups = RequestLookups {
            songs: index_by_id(vec![song], |s| s.id),
            genres: index_by_id(vec![genre], |g| g.id),
            users: index_by_id(vec![user], |u| u.id),
        };
        let response = SongRequestResponse::new(&request, &lookups);

        assert_eq!(response.song.as_ref().map(|s| s.title.as_str()), Some("Creep"));
        assert_eq!(
            response.requested_by.as_ref().map(|u| u.full_name.as_str()),
            Some("Thom Yorke")
        );
    }
}
