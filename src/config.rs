//! Configuration management for the Spotify Track Downloader.
//!
//! This module loads configuration values from environment variables and `.env`
//! files and gathers them into a [`Config`] value that is passed explicitly to
//! every component. Nothing below the CLI entry point reads the environment on
//! its own.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, fmt, net::SocketAddr, path::PathBuf, str::FromStr};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_MARKET: &str = "US";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_DOWNLOAD_DIR: &str = "downloads";
pub const DEFAULT_YTDLP_PATH: &str = "yt-dlp";

/// Loads environment variables from `.env` files.
///
/// A `.env` in the working directory is loaded first, then the one stored in
/// the platform-specific local data directory under `sporldl/.env`. Variables
/// already present in the process environment are never overwritten, and
/// missing files are skipped.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/sporldl/.env`
/// - macOS: `~/Library/Application Support/sporldl/.env`
/// - Windows: `%LOCALAPPDATA%/sporldl/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.to_string()),
    }

    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(format!("{}: {}", path.display(), e)),
    }
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporldl/.env");
    path
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "{} has an invalid value: {}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime configuration shared by the CLI and the HTTP backend.
///
/// Client credentials are required for catalog lookups. Every other field
/// falls back to a default that targets the public Spotify endpoints.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify client identifier (`SPOTIFY_API_AUTH_CLIENT_ID` or `CLIENT_ID`)
    pub client_id: String,
    /// Spotify client secret (`SPOTIFY_API_AUTH_CLIENT_SECRET` or `CLIENT_SECRET`)
    pub client_secret: String,
    /// Base URL of the Web API, without trailing slash (`SPOTIFY_API_URL`)
    pub api_url: String,
    /// Client-credentials token endpoint (`SPOTIFY_API_TOKEN_URL`)
    pub token_url: String,
    /// Market used for artist top tracks (`SPOTIFY_MARKET`)
    pub market: String,
    /// Bind address of the HTTP backend (`SERVER_ADDRESS`)
    pub server_addr: SocketAddr,
    /// Directory downloaded audio is written to (`DOWNLOAD_DIR`)
    pub download_dir: PathBuf,
    /// Path or name of the yt-dlp binary (`YTDLP_PATH`)
    pub ytdlp_path: String,
    /// Target format for audio extraction (`AUDIO_FORMAT`); `None` keeps the
    /// downloaded container as-is
    pub audio_format: Option<String>,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// Call [`load_env`] first if `.env` files should be taken into account.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when client credentials are absent and
    /// [`ConfigError::Invalid`] when `SERVER_ADDRESS` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::load(lookup, true)
    }

    /// Builds the configuration for commands that never talk to Spotify.
    ///
    /// Client credentials are read when present but not required.
    pub fn downloads_only_from_env() -> Result<Self, ConfigError> {
        Self::downloads_only_from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Config::downloads_only_from_env`] with an arbitrary key lookup.
    pub fn downloads_only_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::load(lookup, false)
    }

    fn load<F>(lookup: F, require_credentials: bool) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let credential = |key: &'static str, fallback: &str| {
            match get(key).or_else(|| get(fallback)) {
                Some(value) => Ok(value),
                None if require_credentials => Err(ConfigError::Missing(key)),
                None => Ok(String::new()),
            }
        };

        let client_id = credential("SPOTIFY_API_AUTH_CLIENT_ID", "CLIENT_ID")?;
        let client_secret = credential("SPOTIFY_API_AUTH_CLIENT_SECRET", "CLIENT_SECRET")?;

        let server_addr = get("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.into());
        let server_addr =
            SocketAddr::from_str(&server_addr).map_err(|_| ConfigError::Invalid {
                key: "SERVER_ADDRESS",
                value: server_addr.clone(),
            })?;

        Ok(Self {
            client_id,
            client_secret,
            api_url: get("SPOTIFY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.into()),
            token_url: get("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.into()),
            market: get("SPOTIFY_MARKET").unwrap_or_else(|| DEFAULT_MARKET.into()),
            server_addr,
            download_dir: get("DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_DIR)),
            ytdlp_path: get("YTDLP_PATH").unwrap_or_else(|| DEFAULT_YTDLP_PATH.into()),
            audio_format: get("AUDIO_FORMAT"),
        })
    }
}
