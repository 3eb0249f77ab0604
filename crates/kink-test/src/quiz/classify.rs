use serde::{Deserialize, Serialize};

use super::catalog::{ArchetypeCatalog, PersonalityType};
use super::domain::TraitScores;

/// Thresholds governing how secondary archetypes are selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Minimum similarity a runner-up needs to be reported at all.
    pub secondary_threshold: f32,
    /// How many runners-up to report.
    pub max_secondary: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            secondary_threshold: 0.35,
            max_secondary: 2,
        }
    }
}

/// Classification outcome: the best-matching archetype, ranked runners-up,
/// and how cleanly the profile matched the winner's signature.
#[derive(Debug, Clone)]
pub struct Classification<'a> {
    pub primary: &'a PersonalityType,
    pub secondary: Vec<&'a PersonalityType>,
    pub confidence: f32,
}

/// Match a score vector against the catalog. Similarity per entry is the
/// signature-weighted mean of the relevant axis scores, which lands in
/// `[0, 1]` because signatures are positive and scores are normalized; 1.0
/// means the profile saturates every axis the signature names.
///
/// Exact similarity ties resolve to the entry declared first in the catalog,
/// deterministically. Returns `None` only for an empty catalog.
pub fn classify<'a>(
    scores: &TraitScores,
    catalog: &'a ArchetypeCatalog,
    config: &ClassifierConfig,
) -> Option<Classification<'a>> {
    let mut ranked: Vec<(f32, &PersonalityType)> = catalog
        .entries()
        .iter()
        .map(|entry| (similarity(scores, entry), entry))
        .collect();

    // Stable sort: entries with identical similarity keep declaration order.
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let (confidence, primary) = *ranked.first()?;

    let secondary = ranked
        .iter()
        .skip(1)
        .filter(|(score, _)| *score >= config.secondary_threshold)
        .take(config.max_secondary)
        .map(|(_, entry)| *entry)
        .collect();

    Some(Classification {
        primary,
        secondary,
        confidence: confidence.clamp(0.0, 1.0),
    })
}

fn similarity(scores: &TraitScores, entry: &PersonalityType) -> f32 {
    let weight_total: f32 = entry.signature.iter().map(|(_, weight)| weight).sum();
    if weight_total <= 0.0 {
        return 0.0;
    }

    let weighted: f32 = entry
        .signature
        .iter()
        .map(|(axis, weight)| scores.get(*axis) * weight)
        .sum();

    weighted / weight_total
}
