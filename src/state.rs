use crate::models::TrackerData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    /// In-memory canonical copy of the tracker document; written back to disk
    /// after every mutation.
    pub tracker: Arc<Mutex<TrackerData>>,
    /// Serializes read-modify-write cycles on the per-date checklist
    /// documents so whole-document replacement stays atomic in-process.
    pub checklist: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, tracker: TrackerData) -> Self {
        Self {
            data_dir,
            tracker: Arc::new(Mutex::new(tracker)),
            checklist: Arc::new(Mutex::new(())),
        }
    }
}
