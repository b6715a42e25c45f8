use reqwest::Client;

use crate::{config::Config, info, spotify::check_status, types::SearchResponse};

/// Looks up an artist by free-text name.
///
/// Issues a search limited to a single artist and returns the id of the first
/// hit. There is no ranking or disambiguation beyond what the API returns at
/// index 0.
///
/// # Arguments
///
/// * `config` - Configuration holding the API base URL
/// * `token` - Bearer token from [`get_token`](crate::spotify::auth::get_token)
/// * `name` - Free-text search query
///
/// # Returns
///
/// - `Ok(Some(id))` - Id of the first matching artist
/// - `Ok(None)` - The search succeeded but returned no artist
/// - `Err(reqwest::Error)` - Network error or non-success status (status and
///   body are logged)
///
/// # Example
///
/// ```
/// match search_artist(&config, &token, "Daft Punk").await? {
///     Some(id) => println!("artist {}", id),
///     None => println!("no artist"),
/// }
/// ```
pub async fn search_artist(
    config: &Config,
    token: &str,
    name: &str,
) -> Result<Option<String>, reqwest::Error> {
    let res = search(config, token, name, "artist").await?;

    let artist = res
        .artists
        .and_then(|page| page.items.into_iter().next())
        .map(|artist| artist.id);

    if artist.is_none() {
        info!("No artists found.");
    }

    Ok(artist)
}

/// Looks up a playlist by free-text name.
///
/// Same contract as [`search_artist`]. Spotify may return `null` entries in the
/// playlist item list; those are skipped.
pub async fn search_for_playlist(
    config: &Config,
    token: &str,
    name: &str,
) -> Result<Option<String>, reqwest::Error> {
    let res = search(config, token, name, "playlist").await?;

    let playlist = res
        .playlists
        .and_then(|page| page.items.into_iter().flatten().next())
        .map(|playlist| playlist.id);

    if playlist.is_none() {
        info!("No playlists found.");
    }

    Ok(playlist)
}

async fn search(
    config: &Config,
    token: &str,
    query: &str,
    kind: &str,
) -> Result<SearchResponse, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = config.api_url);

    let client = Client::new();
    let res = client
        .get(&api_url)
        .bearer_auth(token)
        .query(&[("q", query), ("type", kind), ("limit", "1")])
        .send()
        .await?;

    check_status(res).await?.json::<SearchResponse>().await
}
