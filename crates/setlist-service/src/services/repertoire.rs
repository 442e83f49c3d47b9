//! Repertoire service
//!
//! A repertoire is an artist's ordered song list. Songs are appended in the
//! order given; a song already in the list keeps its place.

use setlist_core::entities::Repertoire;
use setlist_core::error::DomainError;
use setlist_core::traits::Store;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::dto::{AddRepertoireSongsRequest, CreateRepertoireRequest, RepertoireResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::projection::project_repertoires;

pub struct RepertoireService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RepertoireService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(artist_profile_id = %request.artist_profile_id))]
    pub async fn create_repertoire(
        &self,
        request: CreateRepertoireRequest,
    ) -> ServiceResult<RepertoireResponse> {
        let artist = self.ctx.artist_repo().get(request.artist_profile_id).await?;
        self.ensure_songs_exist(&request.song_ids).await?;

        let mut repertoire = Repertoire::new(Uuid::new_v4(), artist.id, request.name.trim().to_string());
        repertoire.description = request.description;
        repertoire.is_active = request.is_active;
        repertoire.append_songs(&request.song_ids);

        self.ctx.repertoire_repo().create(&repertoire).await?;
        info!(repertoire_id = %repertoire.id, songs = repertoire.song_ids.len(), "Repertoire created");

        self.project_one(repertoire).await
    }

    /// A repertoire with its songs in order
    #[instrument(skip(self))]
    pub async fn get_repertoire(&self, repertoire_id: Uuid) -> ServiceResult<RepertoireResponse> {
        let repertoire = self.ctx.repertoire_repo().get(repertoire_id).await?;
        self.project_one(repertoire).await
    }

    /// An artist's repertoires, newest first
    #[instrument(skip(self))]
    pub async fn list_by_artist(
        &self,
        artist_profile_id: Uuid,
        active_only: bool,
    ) -> ServiceResult<Vec<RepertoireResponse>> {
        let repertoires = self
            .ctx
            .repertoire_repo()
            .list_by_artist(artist_profile_id, active_only)
            .await?;
        project_repertoires(self.ctx, &repertoires).await
    }

    /// Append songs; ones already present are skipped
    #[instrument(skip(self, request))]
    pub async fn add_songs(
        &self,
        repertoire_id: Uuid,
        request: AddRepertoireSongsRequest,
    ) -> ServiceResult<RepertoireResponse> {
        self.ctx.repertoire_repo().get(repertoire_id).await?;
        self.ensure_songs_exist(&request.song_ids).await?;

        let added = self
            .ctx
            .repertoire_repo()
            .append_songs(repertoire_id, &request.song_ids)
            .await?;
        debug!(added = added.len(), "Songs appended to repertoire");

        self.get_repertoire(repertoire_id).await
    }

    #[instrument(skip(self))]
    pub async fn remove_song(&self, repertoire_id: Uuid, song_id: Uuid) -> ServiceResult<()> {
        self.ctx.repertoire_repo().get(repertoire_id).await?;

        let removed = self
            .ctx
            .repertoire_repo()
            .remove_song(repertoire_id, song_id)
            .await?;
        if !removed {
            return Err(ServiceError::not_found("Repertoire song", song_id));
        }

        info!(song_id = %song_id, "Song removed from repertoire");
        Ok(())
    }

    async fn ensure_songs_exist(&self, song_ids: &[Uuid]) -> ServiceResult<()> {
        if song_ids.is_empty() {
            return Ok(());
        }

        let found = self.ctx.song_repo().find_by_ids(song_ids).await?;
        match song_ids.iter().find(|id| !found.iter().any(|s| s.id == **id)) {
            Some(missing) => Err(DomainError::SongNotFound(*missing).into()),
            None => Ok(()),
        }
    }

    async fn project_one(&self, repertoire: Repertoire) -> ServiceResult<RepertoireResponse> {
        let mut views = project_repertoires(self.ctx, std::slice::from_ref(&repertoire)).await?;
        views
            .pop()
            .ok_or_else(|| ServiceError::internal("repertoire projection came back empty"))
    }
}

#[cfg(test)]
mod tests {
    use setlist_core::entities::ArtistProfile;

    use super::*;
    use crate::services::fixtures;

    async fn artist(ctx: &ServiceContext) -> ArtistProfile {
        let user = fixtures::user(ctx, "singer").await;
        let profile = ArtistProfile::new(Uuid::new_v4(), user.id, "Singer".to_string(), String::new());
        ctx.artist_repo().create(&profile).await.unwrap();
        profile
    }

    fn create(artist_profile_id: Uuid, song_ids: Vec<Uuid>, is_active: bool) -> CreateRepertoireRequest {
        CreateRepertoireRequest {
            artist_profile_id,
            name: "Friday set".to_string(),
            description: None,
            is_active,
            song_ids,
        }
    }

    fn titles(view: &RepertoireResponse) -> Vec<&str> {
        view.songs.iter().map(|s| s.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_songs_keep_order_and_skip_duplicates() {
        let ctx = ServiceContext::in_memory();
        let artist = artist(&ctx).await;
        let genre = fixtures::genre(&ctx, "Samba").await;
        let a = fixtures::song(&ctx, &genre, "Trem das Onze").await;
        let b = fixtures::song(&ctx, &genre, "Aquarela").await;
        let c = fixtures::song(&ctx, &genre, "Mas que Nada").await;
        let service = RepertoireService::new(&ctx);

        let created = service
            .create_repertoire(create(artist.id, vec![a.id, b.id], true))
            .await
            .unwrap();
        assert_eq!(titles(&created), vec!["Trem das Onze", "Aquarela"]);

        let updated = service
            .add_songs(created.id, AddRepertoireSongsRequest { song_ids: vec![b.id, c.id] })
            .await
            .unwrap();
        assert_eq!(titles(&updated), vec!["Trem das Onze", "Aquarela", "Mas que Nada"]);

        service.remove_song(created.id, a.id).await.unwrap();
        let view = service.get_repertoire(created.id).await.unwrap();
        assert_eq!(titles(&view), vec!["Aquarela", "Mas que Nada"]);

        let err = service.remove_song(created.id, a.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_unknown_song_rejected() {
        let ctx = ServiceContext::in_memory();
        let artist = artist(&ctx).await;
        let service = RepertoireService::new(&ctx);

        let err = service
            .create_repertoire(create(artist.id, vec![Uuid::new_v4()], false))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_SONG");

        let created = service.create_repertoire(create(artist.id, vec![], false)).await.unwrap();
        let err = service
            .add_songs(created.id, AddRepertoireSongsRequest { song_ids: vec![Uuid::new_v4()] })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_SONG");
    }

    #[tokio::test]
    async fn test_list_by_artist_active_only() {
        let ctx = ServiceContext::in_memory();
        let artist = artist(&ctx).await;
        let service = RepertoireService::new(&ctx);

        service.create_repertoire(create(artist.id, vec![], true)).await.unwrap();
        service.create_repertoire(create(artist.id, vec![], false)).await.unwrap();

        assert_eq!(service.list_by_artist(artist.id, false).await.unwrap().len(), 2);
        let active = service.list_by_artist(artist.id, true).await.unwrap();
        assert_eq!(active.len(), 1);
        assert!(active[0].is_active);
    }

    #[tokio::test]
    async fn test_repertoire_needs_artist() {
        let ctx = ServiceContext::in_memory();
        let service = RepertoireService::new(&ctx);

        let err = service
            .create_repertoire(create(Uuid::new_v4(), vec![], false))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_ARTIST");
    }
}
