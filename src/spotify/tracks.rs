use reqwest::Client;

use crate::{
    config::Config,
    spotify::check_status,
    types::{PlaylistTracksResponse, TopTracksResponse},
    warning,
};

/// Retrieves an artist's top tracks as display strings.
///
/// Calls `GET /artists/{id}/top-tracks` for the configured market and flattens
/// every track into `"<title> <first artist>"`, keeping Spotify's ranking.
///
/// # Returns
///
/// - `Ok(Vec<String>)` - Flattened tracks, or an empty list if the API answered
///   with a non-success status
/// - `Err(reqwest::Error)` - Network error or a body that does not decode
///
/// # Example
///
/// ```
/// let tracks = get_top_tracks(&config, &token, "4tZwfgrHOc3mvqYlEYSvVi").await?;
/// for track in tracks {
///     println!("{}", track);
/// }
/// ```
pub async fn get_top_tracks(
    config: &Config,
    token: &str,
    artist_id: &str,
) -> Result<Vec<String>, reqwest::Error> {
    let api_url = format!(
        "{uri}/artists/{id}/top-tracks",
        uri = config.api_url,
        id = artist_id
    );

    let client = Client::new();
    let res = client
        .get(&api_url)
        .bearer_auth(token)
        .query(&[("market", config.market.as_str())])
        .send()
        .await?;

    if !res.status().is_success() {
        warning!("Failed to get top tracks ({})", res.status());
        return Ok(Vec::new());
    }

    let data = res.json::<TopTracksResponse>().await?;
    Ok(data.tracks.iter().map(|t| t.display_name()).collect())
}

/// Retrieves the tracks of a playlist as display strings.
///
/// Only the first page of playlist items is read. Items without a track
/// payload (removed or unavailable tracks) are skipped. Playlist order is kept.
///
/// # Returns
///
/// - `Ok(Vec<String>)` - Flattened tracks
/// - `Err(reqwest::Error)` - Network error, non-success status or a malformed body
pub async fn get_tracks_from_playlist(
    config: &Config,
    token: &str,
    playlist_id: &str,
) -> Result<Vec<String>, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = config.api_url,
        id = playlist_id
    );

    let client = Client::new();
    let res = client.get(&api_url).bearer_auth(token).send().await?;

    let data = check_status(res)
        .await?
        .json::<PlaylistTracksResponse>()
        .await?;

    Ok(data
        .items
        .iter()
        .filter_map(|item| item.track.as_ref())
        .map(|track| track.display_name())
        .collect())
}
