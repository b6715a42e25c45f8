//! # CLI Module
//!
//! Command-line front end for the downloader. Each submodule implements one
//! subcommand and delegates the actual work to [`crate::lookup`],
//! [`crate::download`] and [`crate::server`].
//!
//! ## Commands
//!
//! - [`fetch`] - Interactive flow: search, pick tracks, download
//! - [`search`] - Print the tracks a query resolves to without downloading
//! - [`download`] - Download explicitly given track strings
//! - [`serve`] - Run the HTTP backend
//!
//! ## Flow
//!
//! ```text
//! query → token → artist? → top tracks
//!                  else playlist? → playlist tracks
//!                  else exit(1)
//!       → numbered listing → selection → yt-dlp (one track at a time)
//! ```
//!
//! Fatal conditions (no match, failing catalog, broken prompt) end the process
//! through the `error!` macro. Per-track download failures are only reported.

mod download;
mod fetch;
mod search;
mod serve;

pub use download::download;
pub use fetch::fetch;
pub use search::search;
pub use serve::serve;

use std::{borrow::Cow, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

fn spinner(message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
