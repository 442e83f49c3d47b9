//! Genre entity <-> model mapper

use setlist_core::entities::Genre;

use crate::models::GenreModel;

impl From<GenreModel> for Genre {
    fn from(model: GenreModel) -> Self {
        Genre {
            id: model.id,
            name: model.name,
            color: model.color,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
