//! Artist-then-playlist resolution shared by the CLI and the HTTP backend.

use crate::{
    config::Config,
    info,
    spotify::{auth, search, tracks},
    types::{CatalogEntity, Resolved},
};

/// Resolves a free-text query to a catalog entity.
///
/// The artist search always runs first. The playlist search only runs when
/// no artist matches.
pub async fn resolve_entity(
    config: &Config,
    token: &str,
    query: &str,
) -> Result<Option<CatalogEntity>, reqwest::Error> {
    if let Some(id) = search::search_artist(config, token, query).await? {
        return Ok(Some(CatalogEntity::Artist(id)));
    }

    info!("Not an artist. Trying as playlist...");
    Ok(search::search_for_playlist(config, token, query)
        .await?
        .map(CatalogEntity::Playlist))
}

/// Lists the tracks behind a resolved entity as display strings.
pub async fn list_tracks(
    config: &Config,
    token: &str,
    entity: &CatalogEntity,
) -> Result<Vec<String>, reqwest::Error> {
    match entity {
        CatalogEntity::Artist(id) => tracks::get_top_tracks(config, token, id).await,
        CatalogEntity::Playlist(id) => tracks::get_tracks_from_playlist(config, token, id).await,
    }
}

/// Runs the full lookup for a query with a freshly obtained token.
///
/// Returns `Ok(None)` when neither an artist nor a playlist matches and `Err`
/// when the token exchange or any catalog request fails.
pub async fn resolve_tracks(
    config: &Config,
    query: &str,
) -> Result<Option<Resolved>, reqwest::Error> {
    let token = auth::get_token(config).await?;

    let Some(entity) = resolve_entity(config, &token, query).await? else {
        return Ok(None);
    };

    let tracks = list_tracks(config, &token, &entity).await?;
    Ok(Some(Resolved { entity, tracks }))
}
