#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Extension, Form, Json, Router,
    extract::{Path as UrlPath, Query},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use sporldl::{
    config::Config, download::Downloader, management::JobManager, server,
    spotify::auth::basic_auth_header, utils,
};

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
pub const TOKEN: &str = "test-token";

/// Requests received by the stub catalog, in arrival order.
#[derive(Clone, Default)]
pub struct CatalogLog(Arc<Mutex<Vec<String>>>);

impl CatalogLog {
    fn push(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Starts a stub of the Spotify token endpoint and Web API.
///
/// Fixtures:
/// - "daft punk" matches an artist with three top tracks
/// - "road trip" matches no artist but a playlist with a null track item
/// - "null first" matches a playlist whose first search entry is null
/// - "broken" makes the search endpoint answer 500
/// - anything else matches nothing
pub async fn start_catalog() -> (SocketAddr, CatalogLog) {
    let log = CatalogLog::default();
    let router = Router::new()
        .route("/api/token", post(token))
        .route("/v1/search", get(search))
        .route("/v1/artists/{id}/top-tracks", get(top_tracks))
        .route("/v1/playlists/{id}/tracks", get(playlist_tracks))
        .layer(Extension(log.clone()));

    (spawn(router).await, log)
}

pub fn test_config(catalog: SocketAddr, download_dir: PathBuf) -> Config {
    Config {
        client_id: CLIENT_ID.into(),
        client_secret: CLIENT_SECRET.into(),
        api_url: format!("http://{}/v1", catalog),
        token_url: format!("http://{}/api/token", catalog),
        market: "US".into(),
        server_addr: "127.0.0.1:0".parse().unwrap(),
        download_dir,
        ytdlp_path: "yt-dlp".into(),
        audio_format: None,
    }
}

pub fn temp_download_dir() -> PathBuf {
    std::env::temp_dir().join(format!("sporldl-test-{}", utils::generate_job_id()))
}

/// Starts the backend against the stub catalog with a recording downloader.
pub async fn start_backend(config: Config, downloader: RecordingDownloader) -> SocketAddr {
    let router = server::router(Arc::new(config), Arc::new(downloader), JobManager::new());
    spawn(router).await
}

pub async fn wait_for_job(client: &reqwest::Client, url: &str) -> Value {
    for _ in 0..100 {
        let job: Value = client.get(url).send().await.unwrap().json().await.unwrap();
        if job["status"] == "finished" {
            return job;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("download job at {} did not finish", url);
}

/// Downloader that records every attempt and fails on one chosen track.
#[derive(Clone, Default)]
pub struct RecordingDownloader {
    attempts: Arc<Mutex<Vec<(String, PathBuf)>>>,
    fail_on: Option<String>,
}

impl RecordingDownloader {
    pub fn failing_on(track: &str) -> Self {
        Self {
            fail_on: Some(track.to_string()),
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> Vec<(String, PathBuf)> {
        self.attempts.lock().unwrap().clone()
    }
}

impl Downloader for RecordingDownloader {
    async fn download(&self, track: &str, output: &Path) -> Result<PathBuf, String> {
        self.attempts
            .lock()
            .unwrap()
            .push((track.to_string(), output.to_path_buf()));

        if self.fail_on.as_deref() == Some(track) {
            return Err("forced failure".into());
        }

        let mut path = output.as_os_str().to_owned();
        path.push(".m4a");
        Ok(PathBuf::from(path))
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TOKEN))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": { "status": 401, "message": "Invalid access token" } })),
    )
        .into_response()
}

async fn token(
    Extension(log): Extension<CatalogLog>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    log.push("token".into());

    let expected = basic_auth_header(CLIENT_ID, CLIENT_SECRET);
    let auth_ok = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);
    let grant_ok = form.get("grant_type").map(String::as_str) == Some("client_credentials");

    if !auth_ok || !grant_ok {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_client" })),
        )
            .into_response();
    }

    Json(json!({ "access_token": TOKEN, "token_type": "Bearer", "expires_in": 3600 }))
        .into_response()
}

async fn search(
    Extension(log): Extension<CatalogLog>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let q = params.get("q").cloned().unwrap_or_default().to_lowercase();
    let kind = params.get("type").cloned().unwrap_or_default();
    log.push(format!("search:{}:{}", kind, q));

    if !authorized(&headers) {
        return unauthorized();
    }
    if params.get("limit").map(String::as_str) != Some("1") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if q == "broken" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": { "status": 500, "message": "boom" } })),
        )
            .into_response();
    }

    let body = match (kind.as_str(), q.as_str()) {
        ("artist", "daft punk") => json!({
            "artists": { "items": [{ "id": "artist-1", "name": "Daft Punk" }], "next": null, "total": 1 }
        }),
        ("artist", _) => json!({ "artists": { "items": [], "next": null, "total": 0 } }),
        ("playlist", "road trip") => json!({
            "playlists": { "items": [{ "id": "playlist-1", "name": "Road Trip" }], "next": null, "total": 1 }
        }),
        ("playlist", "null first") => json!({
            "playlists": { "items": [null, { "id": "playlist-2", "name": "Second" }], "next": null, "total": 2 }
        }),
        ("playlist", _) => json!({ "playlists": { "items": [], "next": null, "total": 0 } }),
        _ => return StatusCode::BAD_REQUEST.into_response(),
    };

    Json(body).into_response()
}

async fn top_tracks(
    Extension(log): Extension<CatalogLog>,
    headers: HeaderMap,
    UrlPath(id): UrlPath<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    log.push(format!("top-tracks:{}", id));

    if !authorized(&headers) {
        return unauthorized();
    }
    if params.get("market").map(String::as_str) != Some("US") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if id != "artist-1" {
        return StatusCode::NOT_FOUND.into_response();
    }

    Json(json!({
        "tracks": [
            { "name": "One More Time", "artists": [{ "name": "Daft Punk" }] },
            { "name": "Around the World", "artists": [{ "name": "Daft Punk" }] },
            { "name": "Get Lucky", "artists": [{ "name": "Daft Punk" }, { "name": "Pharrell Williams" }] }
        ]
    }))
    .into_response()
}

async fn playlist_tracks(
    Extension(log): Extension<CatalogLog>,
    headers: HeaderMap,
    UrlPath(id): UrlPath<String>,
) -> Response {
    log.push(format!("playlist-tracks:{}", id));

    if !authorized(&headers) {
        return unauthorized();
    }

    match id.as_str() {
        "playlist-1" => Json(json!({
            "items": [
                { "track": { "name": "Go Your Own Way", "artists": [{ "name": "Fleetwood Mac" }] } },
                { "track": null },
                { "added_at": "2024-01-01T00:00:00Z" },
                { "track": { "name": "Africa", "artists": [{ "name": "Toto" }] } }
            ],
            "next": "http://example.invalid/next-page"
        }))
        .into_response(),
        "playlist-2" => Json(json!({ "items": [] })).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
