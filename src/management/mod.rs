mod jobs;

pub use jobs::JobManager;
