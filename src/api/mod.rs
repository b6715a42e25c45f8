//! # API Module
//!
//! HTTP handlers for the downloader backend. The front-end talks to these
//! endpoints; the router itself is assembled in [`crate::server`].
//!
//! ## Endpoints
//!
//! - [`search`] - `POST /search` with `{"query": "..."}`. Resolves an artist,
//!   falling back to a playlist, and answers `{"tracks": [...]}`. Answers 404
//!   when nothing matches, 400 for a missing query and 502 when Spotify fails.
//! - [`download`] - `POST /download` with `{"tracks": [...]}`. Starts a
//!   background download job and answers `202 Accepted` right away, with the
//!   job location in the `Location` header.
//! - [`download_status`] - `GET /download/{id}` returns the job and, once
//!   finished, its report.
//! - [`health`] - `GET /health` for monitoring.
//!
//! Every request to `/search` exchanges a new token; nothing is cached between
//! requests apart from the download job registry.

mod download;
mod health;
mod search;

pub use download::download;
pub use download::download_status;
pub use health::health;
pub use search::search;

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

fn error_response(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
