//! Song entity <-> model mapper

use setlist_core::entities::Song;
use setlist_core::error::DomainError;

use crate::models::SongModel;
use crate::repositories::decode_code;

impl TryFrom<SongModel> for Song {
    type Error = DomainError;

    fn try_from(model: SongModel) -> Result<Self, Self::Error> {
        Ok(Song {
            id: model.id,
            title: model.title,
            artist: model.artist,
            genre_id: model.genre_id,
            duration: model.duration,
            difficulty: decode_code(model.difficulty)?,
            key: model.musical_key,
            has_lyrics: model.has_lyrics,
            lyrics: model.lyrics,
            notes: model.notes,
            year: model.year,
            is_popular: model.is_popular,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
