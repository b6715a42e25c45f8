use crate::{
    config::Config,
    download::{self, YtDlp},
    error, success, warning,
};

pub async fn download(config: &Config, tracks: Vec<String>) {
    let tracks: Vec<String> = tracks
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if tracks.is_empty() {
        warning!("No tracks given.");
        return;
    }

    run_downloads(config, &tracks).await;
}

pub(crate) async fn run_downloads(config: &Config, tracks: &[String]) {
    let downloader = YtDlp::from_config(config);

    let report = match download::download_tracks(&downloader, tracks, &config.download_dir).await
    {
        Ok(report) => report,
        Err(e) => error!(
            "Cannot create download directory {}: {}",
            config.download_dir.display(),
            e
        ),
    };

    if report.failed.is_empty() {
        success!(
            "Downloaded {} tracks to {}",
            report.succeeded.len(),
            config.download_dir.display()
        );
    } else {
        warning!(
            "Downloaded {}/{} tracks, {} failed",
            report.succeeded.len(),
            report.attempted,
            report.failed.len()
        );
    }
}
