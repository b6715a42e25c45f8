//! Spotify Track Downloader Library
//!
//! This library looks up an artist or a playlist on the Spotify Web API, flattens
//! the matching tracks into `"<title> <artist>"` strings and downloads audio for
//! them through `yt-dlp`. The same logic is exposed as an interactive CLI and as a
//! small HTTP backend for a front-end.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the backend (`/search`, `/download`, `/health`)
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loading from the environment and `.env` files
//! - `download` - Audio fetching through `yt-dlp`
//! - `lookup` - Artist-then-playlist resolution shared by CLI and backend
//! - `management` - Download job bookkeeping for the backend
//! - `server` - Router construction and the HTTP server loop
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Track selection and filename helpers
//!
//! # Example
//!
//! ```
//! use sporldl::{config, lookup};
//!
//! #[tokio::main]
//! async fn main() -> sporldl::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     let resolved = lookup::resolve_tracks(&config, "Daft Punk").await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod lookup;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Example
///
/// ```
/// use sporldl::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching for {}", query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Downloaded {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal conditions in the CLI layer. Library code returns
/// errors instead so the HTTP backend keeps running.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems such as a failed catalog request or a single
/// track that could not be downloaded.
///
/// # Example
///
/// ```
/// warning!("Spotify API error: {}", status);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
