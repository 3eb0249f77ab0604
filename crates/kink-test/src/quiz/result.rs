use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::analysis::{build_analysis, build_next_steps, build_recommendations};
use super::analysis::{DetailedAnalysis, Recommendations};
use super::catalog::PersonalityType;
use super::classify::Classification;
use super::domain::TraitScores;

/// Identifier minted when scoring completes. Random (uuid v4) so identifiers
/// stay unique across processes and are never guessable from each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultId(pub String);

impl ResultId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Key format used by every store implementation.
    pub fn storage_key(&self) -> String {
        format!("result_{}", self.0)
    }

    /// Identifiers are uuid-shaped; anything with path separators or other
    /// stray characters is malformed and can never name a stored entry.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owned snapshot of a catalog entry, embedded in stored results so a result
/// survives catalog edits and deserializes without borrowing static data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeSnapshot {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<&PersonalityType> for ArchetypeSnapshot {
    fn from(entry: &PersonalityType) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
        }
    }
}

/// Immutable record assembled once, when scoring completes. Never mutated
/// afterwards; the retention window is enforced by the store, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: ResultId,
    pub primary: ArchetypeSnapshot,
    pub secondary: Vec<ArchetypeSnapshot>,
    pub scores: TraitScores,
    pub confidence: f32,
    pub analysis: DetailedAnalysis,
    pub recommendations: Recommendations,
    pub next_steps: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl TestResult {
    /// Assemble the full record from a classification. `created_at` is passed
    /// in rather than sampled here so assembly stays deterministic under test.
    pub fn assemble(
        classification: &Classification<'_>,
        scores: TraitScores,
        created_at: DateTime<Utc>,
    ) -> Self {
        let analysis = build_analysis(classification, &scores);
        let recommendations = build_recommendations(classification, &scores);
        let next_steps = build_next_steps(classification);

        Self {
            id: ResultId::generate(),
            primary: ArchetypeSnapshot::from(classification.primary),
            secondary: classification
                .secondary
                .iter()
                .map(|entry| ArchetypeSnapshot::from(*entry))
                .collect(),
            scores,
            confidence: classification.confidence,
            analysis,
            recommendations,
            next_steps,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::ArchetypeCatalog;
    use crate::quiz::classify::{classify, ClassifierConfig};
    use crate::quiz::domain::TraitAxis;

    #[test]
    fn generated_ids_are_unique_and_well_formed() {
        let first = ResultId::generate();
        let second = ResultId::generate();
        assert_ne!(first, second);
        assert!(first.is_well_formed());
        assert_eq!(first.storage_key(), format!("result_{}", first.0));
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(!ResultId(String::new()).is_well_formed());
        assert!(!ResultId("../../etc/passwd".to_string()).is_well_formed());
        assert!(!ResultId("abc/def".to_string()).is_well_formed());
    }

    #[test]
    fn assembled_result_serializes_round_trip() {
        let catalog = ArchetypeCatalog::standard();
        let mut scores = TraitScores::zeroed();
        scores.set(TraitAxis::Rope, 0.8);
        scores.set(TraitAxis::Control, 0.5);
        let classification =
            classify(&scores, &catalog, &ClassifierConfig::default()).expect("non-empty catalog");

        let result = TestResult::assemble(&classification, scores, Utc::now());
        let payload = serde_json::to_string(&result).expect("result serializes");
        let restored: TestResult = serde_json::from_str(&payload).expect("result deserializes");

        assert_eq!(result, restored);
    }
}
