//! Genre service

use setlist_core::entities::{is_hex_color, Genre};
use setlist_core::error::DomainError;
use setlist_core::traits::Store;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateGenreRequest, GenreResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct GenreService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GenreService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a genre with a unique name
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_genre(&self, request: CreateGenreRequest) -> ServiceResult<GenreResponse> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::validation("Genre name cannot be blank"));
        }

        if let Some(color) = &request.color {
            if !is_hex_color(color) {
                return Err(ServiceError::validation("Color must be #RRGGBB"));
            }
        }

        if self.ctx.genre_repo().find_by_name(&name).await?.is_some() {
            return Err(DomainError::GenreAlreadyExists.into());
        }

        let mut genre = Genre::new(Uuid::new_v4(), name).with_description(request.description);
        if let Some(color) = request.color {
            genre = genre.with_color(color.to_uppercase());
        }

        self.ctx.genre_repo().create(&genre).await?;
        info!(genre_id = %genre.id, "Genre created");

        Ok(GenreResponse::from(&genre))
    }

    /// Every genre, by name
    #[instrument(skip(self))]
    pub async fn list_genres(&self) -> ServiceResult<Vec<GenreResponse>> {
        let genres = self.ctx.genre_repo().list_all().await?;
        Ok(genres.iter().map(GenreResponse::from).collect())
    }
}
