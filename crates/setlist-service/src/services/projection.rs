//! Bulk loaders behind the response projections
//!
//! Each loader issues one `find_by_ids` per collaborator type no matter how
//! many rows are projected.

use setlist_core::entities::{Repertoire, Song, SongRequest};
use setlist_core::traits::Store;

use crate::dto::{
    distinct_ids, index_by_id, song_responses, RepertoireResponse, RequestLookups,
    SongRequestResponse, SongResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Project songs with their genres
pub async fn project_songs(ctx: &ServiceContext, songs: &[Song]) -> ServiceResult<Vec<SongResponse>> {
    let genre_ids = distinct_ids(songs, |s| s.genre_id);
    let genres = ctx.genre_repo().find_by_ids(&genre_ids).await?;
    Ok(song_responses(songs, &index_by_id(genres, |g| g.id)))
}

/// Project repertoires with their songs in performance order
pub async fn project_repertoires(
    ctx: &ServiceContext,
    repertoires: &[Repertoire],
) -> ServiceResult<Vec<RepertoireResponse>> {
    let song_ids: Vec<_> = {
        let all: Vec<_> = repertoires.iter().flat_map(|r| r.song_ids.iter().copied()).collect();
        distinct_ids(&all, |id| *id)
    };
    let songs = ctx.song_repo().find_by_ids(&song_ids).await?;
    let genre_ids = distinct_ids(&songs, |s| s.genre_id);
    let genres = ctx.genre_repo().find_by_ids(&genre_ids).await?;

    let songs = index_by_id(songs, |s| s.id);
    let genres = index_by_id(genres, |g| g.id);
    Ok(repertoires
        .iter()
        .map(|r| RepertoireResponse::new(r, &songs, &genres))
        .collect())
}

/// Load the songs, genres and requesters a batch of requests refers to
pub async fn request_lookups(
    ctx: &ServiceContext,
    requests: &[SongRequest],
) -> ServiceResult<RequestLookups> {
    let song_ids = distinct_ids(requests, |r| r.song_id);
    let user_ids = distinct_ids(requests, |r| r.requested_by_id);

    let (songs, users) = futures::try_join!(
        ctx.song_repo().find_by_ids(&song_ids),
        ctx.user_repo().find_by_ids(&user_ids),
    )?;

    let genre_ids = distinct_ids(&songs, |s| s.genre_id);
    let genres = ctx.genre_repo().find_by_ids(&genre_ids).await?;

    Ok(RequestLookups {
        songs: index_by_id(songs, |s| s.id),
        genres: index_by_id(genres, |g| g.id),
        users: index_by_id(users, |u| u.id),
    })
}

/// Project song requests, keeping their order
pub async fn project_requests(
    ctx: &ServiceContext,
    requests: &[SongRequest],
) -> ServiceResult<Vec<SongRequestResponse>> {
    let lookups = request_lookups(ctx, requests).await?;
    Ok(requests
        .iter()
        .map(|r| SongRequestResponse::new(r, &lookups))
        .collect())
}
