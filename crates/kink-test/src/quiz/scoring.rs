use std::collections::BTreeMap;

use super::bank::{AnswerOption, QuestionBank};
use super::domain::{Answer, TraitAxis, TraitScores};

/// Per-axis normalization bounds derived from the whole bank, so scores stay
/// comparable across sessions instead of floating with whatever a single user
/// answered.
#[derive(Debug, Clone)]
pub struct TraitScale {
    max_achievable: BTreeMap<TraitAxis, f32>,
}

impl TraitScale {
    /// Theoretical best positive sum per axis: for every question, the highest
    /// option weight for the axis, floored at zero so a question whose options
    /// only subtract from an axis cannot raise its ceiling.
    pub fn for_bank(bank: &QuestionBank) -> Self {
        let mut max_achievable = BTreeMap::new();
        for axis in TraitAxis::ordered() {
            let total: f32 = bank
                .questions()
                .iter()
                .map(|question| {
                    question
                        .options
                        .iter()
                        .map(|option| option.weight(axis))
                        .fold(0.0_f32, f32::max)
                })
                .sum();
            max_achievable.insert(axis, total);
        }
        Self { max_achievable }
    }

    pub fn max_for(&self, axis: TraitAxis) -> f32 {
        self.max_achievable.get(&axis).copied().unwrap_or(0.0)
    }

    /// Accumulated sums are floored at zero before dividing by the axis
    /// ceiling; an axis nothing in the bank can raise normalizes to zero.
    fn normalize(&self, axis: TraitAxis, accumulated: f32) -> f32 {
        let max = self.max_for(axis);
        if max <= 0.0 {
            return 0.0;
        }
        (accumulated.max(0.0) / max).min(1.0)
    }
}

/// Pure scoring pass over a sequence of answers. Missing answers contribute
/// nothing, unknown question or option ids contribute nothing, and a repeated
/// question id keeps only the last selection, so a partial session still
/// yields a full-domain vector.
pub fn score(bank: &QuestionBank, answers: &[Answer]) -> TraitScores {
    score_with_scale(bank, &TraitScale::for_bank(bank), answers)
}

pub(crate) fn score_with_scale(
    bank: &QuestionBank,
    scale: &TraitScale,
    answers: &[Answer],
) -> TraitScores {
    // Last answer per question wins, matching how a user revising an earlier
    // question overwrites the previous selection.
    let mut selected: BTreeMap<&str, &AnswerOption> = BTreeMap::new();
    for answer in answers {
        if let Some(question) = bank.find(&answer.question_id) {
            if let Some(option) = question.option(&answer.option_id) {
                selected.insert(question.id, option);
            }
        }
    }

    let mut accumulated: BTreeMap<TraitAxis, f32> = BTreeMap::new();
    for option in selected.values() {
        for (axis, weight) in option.weights {
            *accumulated.entry(*axis).or_insert(0.0) += weight;
        }
    }

    let mut scores = TraitScores::zeroed();
    for axis in TraitAxis::ordered() {
        let sum = accumulated.get(&axis).copied().unwrap_or(0.0);
        scores.set(axis, scale.normalize(axis, sum));
    }
    scores
}
