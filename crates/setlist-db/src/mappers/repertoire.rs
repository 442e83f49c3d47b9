//! Repertoire entity <-> model mapper

use std::collections::HashMap;

use setlist_core::entities::Repertoire;
use uuid::Uuid;

use crate::models::{RepertoireModel, RepertoireSongModel};

/// Build a repertoire from its row and its join rows
///
/// Join rows may belong to other repertoires and arrive in any order;
/// only the matching ones are kept, sorted by position.
pub fn repertoire_with_songs(model: RepertoireModel, songs: &[RepertoireSongModel]) -> Repertoire {
    let mut entries: Vec<&RepertoireSongModel> = songs
        .iter()
        .filter(|s| s.repertoire_id == model.id)
        .collect();
    entries.sort_by_key(|s| s.position);

    Repertoire {
        id: model.id,
        artist_profile_id: model.artist_profile_id,
        name: model.name,
        description: model.description,
        is_active: model.is_active,
        song_ids: entries.into_iter().map(|s| s.song_id).collect(),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// Attach join rows to several repertoires at once
pub fn repertoires_with_songs(
    models: Vec<RepertoireModel>,
    songs: &[RepertoireSongModel],
) -> Vec<Repertoire> {
    let mut by_repertoire: HashMap<Uuid, Vec<RepertoireSongModel>> = HashMap::new();
    for song in songs {
        by_repertoire
            .entry(song.repertoire_id)
            .or_default()
            .push(song.clone());
    }

    models
        .into_iter()
        .map(|model| {
            let entries = by_repertoire.remove(&model.id).unwrap_or_default();
            repertoire_with_songs(model, &entries)
        })
        .collect()
}
