//! Read-and-render step for stored results. No scoring happens here; a
//! missing result becomes a retake prompt rather than an error.

use serde::Serialize;

use crate::quiz::result::{ResultId, TestResult};
use crate::store::{ResultStore, StoreError};

/// What the results screen should show for an identifier.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResultPresentation {
    /// Stored result found; render it.
    Ready { result: TestResult },
    /// Nothing stored under the identifier (expired, cleared, or never
    /// existed). Expected outcome; offer the quiz again.
    Retake { message: &'static str },
}

const RETAKE_MESSAGE: &str =
    "We couldn't find that result. Results are kept for 30 days on the device that took \
     the test - take the quiz again for a fresh profile.";

/// Resolve an identifier to a renderable presentation. Only a genuinely
/// unavailable store propagates as an error; absence is a normal outcome.
pub fn present<S: ResultStore>(
    store: &S,
    id: &ResultId,
) -> Result<ResultPresentation, StoreError> {
    match store.load(id) {
        Ok(result) => Ok(ResultPresentation::Ready { result }),
        Err(StoreError::NotFound) => Ok(ResultPresentation::Retake {
            message: RETAKE_MESSAGE,
        }),
        Err(err) => Err(err),
    }
}
