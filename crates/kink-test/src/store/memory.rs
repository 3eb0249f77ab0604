use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::{expired, ResultStore, StoreError};
use crate::quiz::result::{ResultId, TestResult};

/// In-memory store used by tests, the CLI demo, and as the ephemeral fallback
/// when no durable storage is configured. Entries vanish with the process.
#[derive(Default, Clone)]
pub struct MemoryResultStore {
    records: Arc<Mutex<HashMap<ResultId, TestResult>>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("store mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultStore for MemoryResultStore {
    fn save(&self, result: &TestResult) -> Result<ResultId, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.insert(result.id.clone(), result.clone());
        Ok(result.id.clone())
    }

    fn load(&self, id: &ResultId) -> Result<TestResult, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        let result = guard.get(id).cloned().ok_or(StoreError::NotFound)?;
        if expired(&result, Utc::now()) {
            guard.remove(id);
            return Err(StoreError::NotFound);
        }
        Ok(result)
    }
}
