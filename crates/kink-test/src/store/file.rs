use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use super::{expired, ResultStore, StoreError};
use crate::quiz::result::{ResultId, TestResult};

/// Durable store writing one JSON document per result into a directory - the
/// local-storage analog for a server process. Key format on disk is
/// `result_<id>.json`.
#[derive(Debug, Clone)]
pub struct FileResultStore {
    dir: PathBuf,
}

impl FileResultStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Health probe: the store counts as available when its directory exists
    /// or can be created.
    pub fn probe(&self) -> bool {
        fs::create_dir_all(&self.dir).is_ok()
    }

    fn path_for(&self, id: &ResultId) -> PathBuf {
        self.dir.join(format!("{}.json", id.storage_key()))
    }
}

impl ResultStore for FileResultStore {
    fn save(&self, result: &TestResult) -> Result<ResultId, StoreError> {
        fs::create_dir_all(&self.dir)
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;

        let payload = serde_json::to_vec_pretty(result)
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        fs::write(self.path_for(&result.id), payload)
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;

        Ok(result.id.clone())
    }

    fn load(&self, id: &ResultId) -> Result<TestResult, StoreError> {
        if !id.is_well_formed() {
            return Err(StoreError::NotFound);
        }

        let path = self.path_for(id);
        let payload = match fs::read(&path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound)
            }
            Err(err) => return Err(StoreError::Unavailable(err.to_string())),
        };

        let result: TestResult = match serde_json::from_slice(&payload) {
            Ok(result) => result,
            Err(err) => {
                // Corrupt payloads read as absent; the caller falls back to
                // the retake path instead of seeing a hard failure.
                debug!(%id, error = %err, "discarding unreadable result payload");
                return Err(StoreError::NotFound);
            }
        };

        if expired(&result, Utc::now()) {
            if let Err(err) = fs::remove_file(&path) {
                debug!(%id, error = %err, "failed to evict expired result");
            }
            return Err(StoreError::NotFound);
        }

        Ok(result)
    }
}
