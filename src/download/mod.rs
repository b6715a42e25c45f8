//! # Download Module
//!
//! Fetches audio for flattened track strings. Each track is turned into a
//! single-result video search (`ytsearch1:<track> audio`) and handed to a
//! [`Downloader`]. The production implementation is [`YtDlp`], which shells out
//! to the `yt-dlp` binary.
//!
//! Tracks are processed strictly one after another. A failing track is logged
//! and recorded in the [`DownloadReport`]; it never stops the remaining ones.
//!
//! Output files are written to `<dir>/<sanitized track>.<ext>`, where the
//! extension is chosen by yt-dlp. See [`sanitize_filename`] for the rules.

mod ytdlp;

pub use ytdlp::YtDlp;

use std::{
    future::Future,
    path::{Path, PathBuf},
};

use crate::{
    Res, info, success,
    types::{DownloadReport, FailedDownload},
    utils::sanitize_filename,
    warning,
};

/// Something that can fetch audio for a single track string.
pub trait Downloader: Send + Sync + 'static {
    /// Downloads audio matching `track`.
    ///
    /// `output` is the target path without extension. On success the path of
    /// the written file is returned, on failure a human readable reason.
    fn download(
        &self,
        track: &str,
        output: &Path,
    ) -> impl Future<Output = Result<PathBuf, String>> + Send;
}

/// Builds the media search query for a track.
pub fn search_query(track: &str) -> String {
    format!("ytsearch1:{} audio", track)
}

/// Downloads every track in order into `output_dir`.
///
/// The directory is created if it does not exist yet. Per-track failures are
/// logged and collected in the returned report.
///
/// # Errors
///
/// Only fails when the output directory cannot be created.
pub async fn download_tracks<D: Downloader>(
    downloader: &D,
    tracks: &[String],
    output_dir: &Path,
) -> Res<DownloadReport> {
    async_fs::create_dir_all(output_dir).await?;

    let mut report = DownloadReport::default();

    for (idx, track) in tracks.iter().enumerate() {
        info!("{}. Downloading: {}", idx + 1, track);
        report.attempted += 1;

        let output = output_dir.join(sanitize_filename(track));
        match downloader.download(track, &output).await {
            Ok(path) => {
                success!("Saved {}", path.display());
                report.succeeded.push(path);
            }
            Err(reason) => {
                warning!("Failed to download {}: {}", track, reason);
                report.failed.push(FailedDownload {
                    track: track.clone(),
                    reason,
                });
            }
        }
    }

    Ok(report)
}
