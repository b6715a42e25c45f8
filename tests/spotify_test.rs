mod common;

use common::{TOKEN, start_catalog, temp_download_dir, test_config};
use sporldl::{
    lookup,
    spotify::{auth, search, tracks},
    types::CatalogEntity,
};

#[tokio::test]
async fn test_get_token_uses_client_credentials() {
    let (catalog, log) = start_catalog().await;
    let config = test_config(catalog, temp_download_dir());

    let token = auth::get_token(&config).await.unwrap();

    assert_eq!(token, TOKEN);
    assert_eq!(log.entries(), vec!["token".to_string()]);
}

#[tokio::test]
async fn test_get_token_rejects_bad_credentials() {
    let (catalog, _) = start_catalog().await;
    let mut config = test_config(catalog, temp_download_dir());
    config.client_secret = "wrong".into();

    let err = auth::get_token(&config).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
}

#[test]
fn test_basic_auth_header() {
    // base64("test-client:test-secret")
    assert_eq!(
        auth::basic_auth_header("test-client", "test-secret"),
        "Basic dGVzdC1jbGllbnQ6dGVzdC1zZWNyZXQ="
    );
}

#[tokio::test]
async fn test_search_artist() {
    let (catalog, _) = start_catalog().await;
    let config = test_config(catalog, temp_download_dir());

    let found = search::search_artist(&config, TOKEN, "Daft Punk").await.unwrap();
    let missing = search::search_artist(&config, TOKEN, "Road Trip").await.unwrap();

    assert_eq!(found.as_deref(), Some("artist-1"));
    assert_eq!(missing, None);
}

#[tokio::test]
async fn test_search_failure_is_an_error_not_a_miss() {
    let (catalog, _) = start_catalog().await;
    let config = test_config(catalog, temp_download_dir());

    let err = search::search_artist(&config, TOKEN, "broken").await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));

    let err = search::search_artist(&config, "expired", "Daft Punk")
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
}

#[tokio::test]
async fn test_search_for_playlist_skips_null_entries() {
    let (catalog, _) = start_catalog().await;
    let config = test_config(catalog, temp_download_dir());

    let first = search::search_for_playlist(&config, TOKEN, "Road Trip").await.unwrap();
    let after_null = search::search_for_playlist(&config, TOKEN, "null first")
        .await
        .unwrap();
    let missing = search::search_for_playlist(&config, TOKEN, "nothing").await.unwrap();

    assert_eq!(first.as_deref(), Some("playlist-1"));
    assert_eq!(after_null.as_deref(), Some("playlist-2"));
    assert_eq!(missing, None);
}

#[tokio::test]
async fn test_get_top_tracks_keeps_ranking() {
    let (catalog, _) = start_catalog().await;
    let config = test_config(catalog, temp_download_dir());

    let list = tracks::get_top_tracks(&config, TOKEN, "artist-1").await.unwrap();

    assert_eq!(
        list,
        vec![
            "One More Time Daft Punk",
            "Around the World Daft Punk",
            "Get Lucky Daft Punk",
        ]
    );
}

#[tokio::test]
async fn test_get_top_tracks_failure_yields_empty_list() {
    let (catalog, _) = start_catalog().await;
    let config = test_config(catalog, temp_download_dir());

    let list = tracks::get_top_tracks(&config, TOKEN, "unknown").await.unwrap();

    assert!(list.is_empty());
}

#[tokio::test]
async fn test_get_tracks_from_playlist_skips_missing_tracks() {
    let (catalog, _) = start_catalog().await;
    let config = test_config(catalog, temp_download_dir());

    let list = tracks::get_tracks_from_playlist(&config, TOKEN, "playlist-1")
        .await
        .unwrap();

    assert_eq!(list, vec!["Go Your Own Way Fleetwood Mac", "Africa Toto"]);
}

#[tokio::test]
async fn test_get_tracks_from_playlist_failure_is_an_error() {
    let (catalog, _) = start_catalog().await;
    let config = test_config(catalog, temp_download_dir());

    let result = tracks::get_tracks_from_playlist(&config, TOKEN, "unknown").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_resolve_prefers_artist() {
    let (catalog, log) = start_catalog().await;
    let config = test_config(catalog, temp_download_dir());

    let resolved = lookup::resolve_tracks(&config, "Daft Punk")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(resolved.entity, CatalogEntity::Artist("artist-1".into()));
    assert_eq!(resolved.tracks.len(), 3);
    // no playlist search once the artist matched
    assert_eq!(
        log.entries(),
        vec!["token", "search:artist:daft punk", "top-tracks:artist-1"]
    );
}

#[tokio::test]
async fn test_resolve_falls_back_to_playlist() {
    let (catalog, log) = start_catalog().await;
    let config = test_config(catalog, temp_download_dir());

    let resolved = lookup::resolve_tracks(&config, "Road Trip")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(resolved.entity, CatalogEntity::Playlist("playlist-1".into()));
    assert_eq!(
        log.entries(),
        vec![
            "token",
            "search:artist:road trip",
            "search:playlist:road trip",
            "playlist-tracks:playlist-1"
        ]
    );
}

#[tokio::test]
async fn test_resolve_nothing_found() {
    let (catalog, _) = start_catalog().await;
    let config = test_config(catalog, temp_download_dir());

    let resolved = lookup::resolve_tracks(&config, "nothing").await.unwrap();

    assert!(resolved.is_none());
}

#[tokio::test]
async fn test_resolve_fetches_a_fresh_token_every_time() {
    let (catalog, log) = start_catalog().await;
    let config = test_config(catalog, temp_download_dir());

    lookup::resolve_tracks(&config, "nothing").await.unwrap();
    lookup::resolve_tracks(&config, "nothing").await.unwrap();

    let tokens = log.entries().iter().filter(|e| *e == "token").count();
    assert_eq!(tokens, 2);
}
