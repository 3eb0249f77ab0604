use std::sync::Arc;

use crate::quiz::domain::Answer;
use crate::quiz::result::{ResultId, TestResult};
use crate::quiz::service::QuizService;
use crate::store::{MemoryResultStore, ResultStore, StoreError};

/// Store stub that always reports the backing storage as unusable.
pub(super) struct UnavailableStore;

impl ResultStore for UnavailableStore {
    fn save(&self, _result: &TestResult) -> Result<ResultId, StoreError> {
        Err(StoreError::Unavailable("storage disabled".to_string()))
    }

    fn load(&self, _id: &ResultId) -> Result<TestResult, StoreError> {
        Err(StoreError::Unavailable("storage disabled".to_string()))
    }
}

pub(super) fn memory_service() -> (Arc<MemoryResultStore>, QuizService<MemoryResultStore>) {
    let store = Arc::new(MemoryResultStore::new());
    let service = QuizService::new(store.clone());
    (store, service)
}

/// A dominance-leaning session answering a handful of questions.
pub(super) fn dominant_answers() -> Vec<Answer> {
    vec![
        Answer::new("role", "lead"),
        Answer::new("control", "uneasy"),
        Answer::new("words", "orders"),
        Answer::new("structure", "set-rules"),
        Answer::new("aftercare", "comfort"),
    ]
}
