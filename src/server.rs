use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{Res, api, config::Config, download::Downloader, info, management::JobManager};

/// Assembles the backend router.
///
/// Cross-origin requests are accepted from any origin.
pub fn router<D: Downloader>(config: Arc<Config>, downloader: Arc<D>, jobs: JobManager) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/search", post(api::search))
        .route("/download", post(api::download::<D>))
        .route("/download/{id}", get(api::download_status))
        .layer(Extension(config))
        .layer(Extension(downloader))
        .layer(Extension(jobs))
        .layer(CorsLayer::permissive())
}

pub async fn start_api_server<D: Downloader>(config: Config, downloader: D) -> Res<()> {
    let addr = config.server_addr;
    let app = router(Arc::new(config), Arc::new(downloader), JobManager::new());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
