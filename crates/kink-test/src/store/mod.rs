//! Result persistence with an advisory retention window.
//!
//! Stores are deliberately dumb key-value holders: identifiers are minted by
//! the quiz core, entries are immutable once written, and expiry is only ever
//! checked at load time. Nothing in here talks to the network.

mod file;
mod memory;

pub use file::FileResultStore;
pub use memory::MemoryResultStore;

use chrono::{DateTime, Duration, Utc};

use crate::quiz::result::{ResultId, TestResult};

/// Days a stored result remains loadable before it is considered expired.
/// Advisory: enforced by eviction on read, never by a timer.
pub const RETENTION_DAYS: i64 = 30;

/// Storage abstraction so the quiz service can be exercised in isolation.
pub trait ResultStore: Send + Sync {
    /// Serialize and persist the result under its identifier, returning the
    /// identifier that was written.
    fn save(&self, result: &TestResult) -> Result<ResultId, StoreError>;

    /// Fetch a previously saved result. Absent, expired, malformed-id, and
    /// corrupt-payload cases all surface as [`StoreError::NotFound`]; callers
    /// treat that as a normal outcome and offer a retake path.
    fn load(&self, id: &ResultId) -> Result<TestResult, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("result not found")]
    NotFound,
    #[error("result storage unavailable: {0}")]
    Unavailable(String),
}

pub(crate) fn expired(result: &TestResult, now: DateTime<Utc>) -> bool {
    now - result.created_at > Duration::days(RETENTION_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::ArchetypeCatalog;
    use crate::quiz::classify::{classify, ClassifierConfig};
    use crate::quiz::domain::TraitScores;

    pub(super) fn sample_result(created_at: DateTime<Utc>) -> TestResult {
        let catalog = ArchetypeCatalog::standard();
        let scores = TraitScores::zeroed();
        let classification =
            classify(&scores, &catalog, &ClassifierConfig::default()).expect("non-empty catalog");
        TestResult::assemble(&classification, scores, created_at)
    }

    #[test]
    fn retention_window_is_inclusive_of_the_final_day() {
        let created = Utc::now() - Duration::days(RETENTION_DAYS);
        let result = sample_result(created);
        assert!(!expired(&result, created + Duration::days(RETENTION_DAYS)));
        assert!(expired(
            &result,
            created + Duration::days(RETENTION_DAYS) + Duration::seconds(1)
        ));
    }
}
