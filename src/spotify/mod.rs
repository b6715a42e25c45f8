//! # Spotify Integration Module
//!
//! This module wraps the handful of Spotify Web API calls the downloader needs.
//! It is organised by concern:
//!
//! ```text
//! Application Layer (CLI, HTTP backend)
//!          ↓
//!      lookup::resolve_tracks
//!          ↓
//! Spotify Integration Layer
//!     ├── auth    (client-credentials token exchange)
//!     ├── search  (artist / playlist lookup)
//!     └── tracks  (top tracks, playlist tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials grant
//! - `GET /search` - artist and playlist search, limited to one result
//! - `GET /artists/{id}/top-tracks` - top tracks for a fixed market
//! - `GET /playlists/{id}/tracks` - first page of playlist items
//!
//! ## Error Types
//!
//! All functions return `Result<_, reqwest::Error>`. Non-success statuses are
//! logged together with the response body before being turned into errors,
//! so "nothing found" (`Ok(None)` / empty list) and "request failed" (`Err`)
//! stay distinguishable for callers.
//!
//! Every function takes the [`Config`](crate::config::Config) explicitly and
//! builds its own client. Tokens are never cached.

pub mod auth;
pub mod search;
pub mod tracks;

use reqwest::Response;

use crate::warning;

/// Passes successful responses through and logs status and body of the rest.
async fn check_status(res: Response) -> Result<Response, reqwest::Error> {
    let failure = res.error_for_status_ref().err();

    match failure {
        None => Ok(res),
        Some(err) => {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            warning!("Spotify API error: {}", status);
            if !body.is_empty() {
                warning!("{}", body);
            }
            Err(err)
        }
    }
}
