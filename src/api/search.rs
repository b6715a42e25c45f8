use std::sync::Arc;

use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    api::error_response,
    config::Config,
    lookup,
    types::{SearchRequest, SearchResponseBody},
    warning,
};

pub async fn search(
    Extension(config): Extension<Arc<Config>>,
    Json(request): Json<SearchRequest>,
) -> Response {
    let query = request.query.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing query");
    }

    match lookup::resolve_tracks(&config, query).await {
        Ok(Some(resolved)) => Json(SearchResponseBody {
            tracks: resolved.tracks,
        })
        .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "No artist or playlist found"),
        Err(e) => {
            warning!("Search for '{}' failed: {}", query, e);
            error_response(
                StatusCode::BAD_GATEWAY,
                format!("Catalog request failed: {}", e),
            )
        }
    }
}
