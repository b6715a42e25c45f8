use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::Path,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    api::error_response,
    config::Config,
    download::{self, Downloader},
    management::JobManager,
    success,
    types::{DownloadReport, DownloadRequest, FailedDownload},
    warning,
};

pub async fn download<D: Downloader>(
    Extension(config): Extension<Arc<Config>>,
    Extension(downloader): Extension<Arc<D>>,
    Extension(jobs): Extension<JobManager>,
    Json(request): Json<DownloadRequest>,
) -> Response {
    let job = jobs.start(request.tracks.clone()).await;
    let job_id = job.id.clone();

    let registry = jobs.clone();
    tokio::spawn(async move {
        let tracks = request.tracks;
        let report =
            match download::download_tracks(downloader.as_ref(), &tracks, &config.download_dir)
                .await
            {
                Ok(report) => report,
                Err(e) => {
                    warning!("Download job {} failed: {}", job_id, e);
                    DownloadReport {
                        attempted: 0,
                        succeeded: Vec::new(),
                        failed: tracks
                            .iter()
                            .map(|track| FailedDownload {
                                track: track.clone(),
                                reason: e.to_string(),
                            })
                            .collect(),
                    }
                }
            };

        success!(
            "Download job {} finished: {}/{} tracks saved",
            job_id,
            report.succeeded.len(),
            tracks.len()
        );
        registry.finish(&job_id, report).await;
    });

    (
        StatusCode::ACCEPTED,
        [(LOCATION, format!("/download/{}", job.id))],
        Json(json!({ "status": "Download started" })),
    )
        .into_response()
}

pub async fn download_status(
    Extension(jobs): Extension<JobManager>,
    Path(id): Path<String>,
) -> Response {
    match jobs.get(&id).await {
        Some(job) => Json(job).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Unknown download job"),
    }
}
