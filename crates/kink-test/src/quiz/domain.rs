use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The closed set of axes the quiz measures. Every score vector carries all of
/// them; nothing else is a valid key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitAxis {
    Dominance,
    Submission,
    Sadism,
    Masochism,
    Switch,
    Vanilla,
    Rope,
    Degradation,
    Praise,
    Control,
    Service,
    Bratty,
    Caregiver,
    Pet,
    Exhibitionist,
    Voyeur,
}

impl TraitAxis {
    pub const fn ordered() -> [Self; 16] {
        [
            Self::Dominance,
            Self::Submission,
            Self::Sadism,
            Self::Masochism,
            Self::Switch,
            Self::Vanilla,
            Self::Rope,
            Self::Degradation,
            Self::Praise,
            Self::Control,
            Self::Service,
            Self::Bratty,
            Self::Caregiver,
            Self::Pet,
            Self::Exhibitionist,
            Self::Voyeur,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dominance => "Dominance",
            Self::Submission => "Submission",
            Self::Sadism => "Sadism",
            Self::Masochism => "Masochism",
            Self::Switch => "Switch",
            Self::Vanilla => "Vanilla",
            Self::Rope => "Rope",
            Self::Degradation => "Degradation",
            Self::Praise => "Praise",
            Self::Control => "Control",
            Self::Service => "Service",
            Self::Bratty => "Bratty",
            Self::Caregiver => "Caregiver",
            Self::Pet => "Pet",
            Self::Exhibitionist => "Exhibitionist",
            Self::Voyeur => "Voyeur",
        }
    }
}

/// A user's selected option for one question. A later answer for the same
/// question replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub option_id: String,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            option_id: option_id.into(),
        }
    }
}

/// Normalized per-axis scores. Invariants: every [`TraitAxis`] is present and
/// every value sits in `[0, 1]`. Deserializing a partial map fills the missing
/// axes with zero rather than breaking the full-domain guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<TraitAxis, f32>",
    into = "BTreeMap<TraitAxis, f32>"
)]
pub struct TraitScores {
    scores: BTreeMap<TraitAxis, f32>,
}

impl TraitScores {
    /// Full-domain vector with every axis at zero.
    pub fn zeroed() -> Self {
        let scores = TraitAxis::ordered()
            .into_iter()
            .map(|axis| (axis, 0.0))
            .collect();
        Self { scores }
    }

    pub fn get(&self, axis: TraitAxis) -> f32 {
        self.scores.get(&axis).copied().unwrap_or(0.0)
    }

    pub(crate) fn set(&mut self, axis: TraitAxis, value: f32) {
        self.scores.insert(axis, value.clamp(0.0, 1.0));
    }

    pub fn iter(&self) -> impl Iterator<Item = (TraitAxis, f32)> + '_ {
        self.scores.iter().map(|(axis, value)| (*axis, *value))
    }

    /// Axes ranked by descending score; equal scores keep declaration order.
    pub fn ranked(&self) -> Vec<(TraitAxis, f32)> {
        let mut entries: Vec<(TraitAxis, f32)> = TraitAxis::ordered()
            .into_iter()
            .map(|axis| (axis, self.get(axis)))
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }
}

impl From<BTreeMap<TraitAxis, f32>> for TraitScores {
    fn from(partial: BTreeMap<TraitAxis, f32>) -> Self {
        let mut scores = Self::zeroed();
        for (axis, value) in partial {
            scores.set(axis, value);
        }
        scores
    }
}

impl From<TraitScores> for BTreeMap<TraitAxis, f32> {
    fn from(value: TraitScores) -> Self {
        value.scores
    }
}
