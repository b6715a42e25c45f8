use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::Mutex;

use crate::{
    types::{DownloadJob, DownloadReport, JobStatus},
    utils,
};

/// How long a finished job stays queryable.
pub const DEFAULT_RETENTION_MINUTES: i64 = 60;
/// Finished jobs kept at most; the oldest are dropped first.
pub const DEFAULT_MAX_FINISHED: usize = 100;

/// In-memory registry of download jobs started through the HTTP backend.
///
/// Running jobs are never evicted. Finished jobs are dropped once they are
/// older than the retention period or when more than `max_finished` of them
/// pile up. Eviction happens whenever the registry is touched.
#[derive(Clone)]
pub struct JobManager {
    registry: Arc<Mutex<Registry>>,
    retention: TimeDelta,
    max_finished: usize,
}

#[derive(Default)]
struct Registry {
    jobs: HashMap<String, DownloadJob>,
    // finished job ids, oldest first
    finished: VecDeque<String>,
}

impl Registry {
    fn evict(&mut self, now: DateTime<Utc>, retention: TimeDelta, max_finished: usize) {
        let cutoff = now - retention;
        while let Some(id) = self.finished.front() {
            let expired = self
                .jobs
                .get(id)
                .and_then(|job| job.finished_at)
                .is_none_or(|finished_at| finished_at <= cutoff);

            if !expired && self.finished.len() <= max_finished {
                break;
            }
            if let Some(id) = self.finished.pop_front() {
                self.jobs.remove(&id);
            }
        }
    }
}

impl Default for JobManager {
    fn default() -> Self {
        Self::with_limits(
            TimeDelta::minutes(DEFAULT_RETENTION_MINUTES),
            DEFAULT_MAX_FINISHED,
        )
    }
}

impl JobManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(retention: TimeDelta, max_finished: usize) -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::default())),
            retention,
            max_finished,
        }
    }

    pub async fn start(&self, tracks: Vec<String>) -> DownloadJob {
        let job = DownloadJob {
            id: utils::generate_job_id(),
            status: JobStatus::Running,
            tracks,
            started_at: Utc::now(),
            finished_at: None,
            report: None,
        };

        let mut registry = self.registry.lock().await;
        self.evict(&mut registry);
        registry.jobs.insert(job.id.clone(), job.clone());
        job
    }

    pub async fn finish(&self, id: &str, report: DownloadReport) {
        let mut registry = self.registry.lock().await;
        if let Some(job) = registry.jobs.get_mut(id) {
            if job.status == JobStatus::Finished {
                return;
            }
            job.status = JobStatus::Finished;
            job.finished_at = Some(Utc::now());
            job.report = Some(report);
            registry.finished.push_back(id.to_string());
        }
        self.evict(&mut registry);
    }

    pub async fn get(&self, id: &str) -> Option<DownloadJob> {
        let mut registry = self.registry.lock().await;
        self.evict(&mut registry);
        registry.jobs.get(id).cloned()
    }

    pub async fn job_count(&self) -> usize {
        let mut registry = self.registry.lock().await;
        self.evict(&mut registry);
        registry.jobs.len()
    }

    pub async fn running_count(&self) -> usize {
        self.registry
            .lock()
            .await
            .jobs
            .values()
            .filter(|job| job.status == JobStatus::Running)
            .count()
    }

    fn evict(&self, registry: &mut Registry) {
        registry.evict(Utc::now(), self.retention, self.max_finished);
    }
}
