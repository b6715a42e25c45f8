use tabled::Table;

use crate::{
    cli::spinner,
    config::Config,
    error, info, lookup,
    spotify::auth,
    types::{CatalogEntity, TrackTableRow},
    warning,
};

pub async fn search(config: &Config, query: &str) {
    let tracks = resolve(config, query).await;
    if tracks.is_empty() {
        warning!("No tracks found for '{}'.", query);
        return;
    }

    display_tracks(&tracks);
}

/// Resolves a query to its track list, exiting when nothing matches.
pub(crate) async fn resolve(config: &Config, query: &str) -> Vec<String> {
    let pb = spinner("Requesting access token...");
    let token = match auth::get_token(config).await {
        Ok(token) => token,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to obtain access token: {}", e)
        }
    };

    pb.set_message(format!("Searching for '{}'...", query));
    let entity = match lookup::resolve_entity(config, &token, query).await {
        Ok(entity) => entity,
        Err(e) => {
            pb.finish_and_clear();
            error!("Search failed: {}", e)
        }
    };
    pb.finish_and_clear();

    let entity = match entity {
        Some(entity) => entity,
        None => error!("Could not find artist or playlist. Try again."),
    };

    match entity {
        CatalogEntity::Artist(_) => info!("Found artist: fetching top tracks..."),
        CatalogEntity::Playlist(_) => info!("Found playlist: fetching tracks..."),
    }

    let pb = spinner("Fetching tracks...");
    let tracks = lookup::list_tracks(config, &token, &entity).await;
    pb.finish_and_clear();

    match tracks {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to fetch tracks: {}", e),
    }
}

pub(crate) fn display_tracks(tracks: &[String]) {
    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(idx, track)| TrackTableRow {
            index: idx + 1,
            track: track.clone(),
        })
        .collect();

    info!("Available tracks:");
    println!("{}", Table::new(rows));
}
