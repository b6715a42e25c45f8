use dialoguer::Input;

use crate::{
    cli::{
        download::run_downloads,
        search::{display_tracks, resolve},
    },
    config::Config,
    error, info, utils, warning,
};

pub async fn fetch(config: &Config, query: Option<String>, all: bool) {
    let query = match query {
        Some(query) => query,
        None => prompt("Enter an artist name or playlist name"),
    };

    let query = query.trim();
    if query.is_empty() {
        error!("No search term given.");
    }

    let tracks = resolve(config, query).await;
    if tracks.is_empty() {
        warning!("No tracks found for '{}'.", query);
        return;
    }

    display_tracks(&tracks);

    let selected = if all {
        tracks
    } else {
        prompt_selection(&tracks)
    };

    if selected.is_empty() {
        warning!("No tracks selected.");
        return;
    }

    run_downloads(config, &selected).await;
}

fn prompt_selection(tracks: &[String]) -> Vec<String> {
    let answer = prompt("Do you want to download all tracks (Y/N)");
    if answer == utils::SELECT_ALL {
        info!("Downloading all songs");
        return tracks.to_vec();
    }

    let selection = prompt("Enter the track numbers you want to download");
    utils::select_indices(&selection, tracks)
}

fn prompt(message: &str) -> String {
    match Input::<String>::new()
        .with_prompt(message)
        .allow_empty(true)
        .interact_text()
    {
        Ok(answer) => answer,
        Err(e) => error!("Failed to read input: {}", e),
    }
}
