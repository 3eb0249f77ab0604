use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::bank::QuestionBank;
use super::catalog::ArchetypeCatalog;
use super::classify::{classify, ClassifierConfig};
use super::domain::Answer;
use super::result::{ResultId, TestResult};
use super::scoring;
use crate::store::{ResultStore, StoreError};

/// Service composing the question bank, classifier catalog, and result store.
pub struct QuizService<S> {
    bank: QuestionBank,
    catalog: ArchetypeCatalog,
    config: ClassifierConfig,
    store: Arc<S>,
}

/// What a submission produced. `persisted` is false when storage was
/// unavailable; the result is still complete and renderable in-memory so a
/// finished session is never lost to a storage outage.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub result: TestResult,
    pub persisted: bool,
}

impl<S> QuizService<S>
where
    S: ResultStore + 'static,
{
    /// Standard bank, catalog, and thresholds over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_parts(
            QuestionBank::standard(),
            ArchetypeCatalog::standard(),
            ClassifierConfig::default(),
            store,
        )
    }

    pub fn with_parts(
        bank: QuestionBank,
        catalog: ArchetypeCatalog,
        config: ClassifierConfig,
        store: Arc<S>,
    ) -> Self {
        Self {
            bank,
            catalog,
            config,
            store,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Score and classify a completed (or partial) answer set, assemble the
    /// immutable result, and attempt to persist it.
    pub fn submit(&self, answers: &[Answer]) -> Result<SubmissionOutcome, QuizServiceError> {
        let scores = scoring::score(&self.bank, answers);
        let classification = classify(&scores, &self.catalog, &self.config)
            .ok_or(QuizServiceError::EmptyCatalog)?;

        let result = TestResult::assemble(&classification, scores, Utc::now());

        let persisted = match self.store.save(&result) {
            Ok(_) => true,
            Err(StoreError::Unavailable(reason)) => {
                warn!(%reason, result_id = %result.id, "result not persisted; serving in-memory");
                false
            }
            Err(StoreError::NotFound) => false,
        };

        Ok(SubmissionOutcome { result, persisted })
    }

    pub fn result(&self, id: &ResultId) -> Result<TestResult, QuizServiceError> {
        Ok(self.store.load(id)?)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Error raised by the quiz service.
#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error("archetype catalog has no entries")]
    EmptyCatalog,
    #[error(transparent)]
    Store(#[from] StoreError),
}
