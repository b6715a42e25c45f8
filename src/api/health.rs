use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::management::JobManager;

pub async fn health(Extension(jobs): Extension<JobManager>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "running_jobs": jobs.running_count().await
    }))
}
