use serde::{Deserialize, Serialize};

use super::classify::Classification;
use super::domain::{TraitAxis, TraitScores};

/// Structured narrative attached to a completed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub summary: String,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
}

/// Categorized guidance lists rendered alongside a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub communication: Vec<String>,
    pub exploration: Vec<String>,
    pub aftercare: Vec<String>,
}

const PROMINENT_SCORE: f32 = 0.5;

/// Confidence bands used when phrasing the summary.
fn confidence_phrase(confidence: f32) -> &'static str {
    if confidence >= 0.75 {
        "a strong, clearly defined match"
    } else if confidence >= 0.5 {
        "a solid match with room for nuance"
    } else {
        "a blended profile rather than a single clear type"
    }
}

pub(crate) fn build_analysis(
    classification: &Classification<'_>,
    scores: &TraitScores,
) -> DetailedAnalysis {
    let primary = classification.primary;

    let mut summary = format!(
        "Your responses point to {} as your primary archetype - {}.",
        primary.name,
        confidence_phrase(classification.confidence)
    );
    if let Some(first_secondary) = classification.secondary.first() {
        summary.push_str(&format!(
            " {} also shows up strongly in your answers.",
            first_secondary.name
        ));
    }

    let strengths = prominent_axes(scores)
        .into_iter()
        .map(|(axis, value)| {
            format!(
                "{} stands out in your profile ({}% of its possible range)",
                axis.label(),
                (value * 100.0).round() as u8
            )
        })
        .collect();

    let mut growth_areas = Vec::new();
    if classification.confidence < 0.5 {
        growth_areas.push(
            "Your answers spread across several archetypes; revisiting the quiz after some \
             reflection may sharpen the picture."
                .to_string(),
        );
    }
    for entry in &classification.secondary {
        growth_areas.push(format!(
            "Your {} side is worth exploring alongside your primary style.",
            entry.name
        ));
    }
    if growth_areas.is_empty() {
        growth_areas.push(
            "Your profile is well defined; the next step is depth rather than breadth.".to_string(),
        );
    }

    DetailedAnalysis {
        summary,
        strengths,
        growth_areas,
    }
}

pub(crate) fn build_recommendations(
    classification: &Classification<'_>,
    scores: &TraitScores,
) -> Recommendations {
    let mut communication = vec![
        "Share these results with a partner as a conversation starter, not a contract.".to_string(),
        "Agree on limits and signals before trying anything new.".to_string(),
    ];
    if classification.confidence < 0.5 {
        communication.push(
            "A blended profile benefits from extra check-ins; name what you want out of each \
             encounter explicitly."
                .to_string(),
        );
    }

    let mut exploration = Vec::new();
    for (axis, _) in prominent_axes(scores) {
        if let Some(note) = exploration_note(axis) {
            exploration.push(note.to_string());
        }
    }
    if exploration.is_empty() {
        exploration.push(
            "Start with low-intensity versions of whatever caught your curiosity in the quiz."
                .to_string(),
        );
    }

    let aftercare = vec![
        "Plan aftercare before a scene, not after; needs are easier to name in advance.".to_string(),
        "Check in the next day as well - reactions sometimes surface late.".to_string(),
    ];

    Recommendations {
        communication,
        exploration,
        aftercare,
    }
}

pub(crate) fn build_next_steps(classification: &Classification<'_>) -> Vec<String> {
    vec![
        format!(
            "Read up on the {} archetype and see which parts ring true.",
            classification.primary.name
        ),
        "Talk through your top traits with a partner or trusted friend.".to_string(),
        "Pick one low-stakes thing to try and agree on how you will debrief it.".to_string(),
        "Retake the test in a few months; profiles drift as experience accumulates.".to_string(),
    ]
}

/// Top three axes that clear the prominence bar, best first. The ranked order
/// is deterministic, so the generated text is too.
fn prominent_axes(scores: &TraitScores) -> Vec<(TraitAxis, f32)> {
    scores
        .ranked()
        .into_iter()
        .filter(|(_, value)| *value >= PROMINENT_SCORE)
        .take(3)
        .collect()
}

fn exploration_note(axis: TraitAxis) -> Option<&'static str> {
    match axis {
        TraitAxis::Rope => {
            Some("Look into beginner rope classes; self-taught suspension is how people get hurt.")
        }
        TraitAxis::Sadism | TraitAxis::Masochism => {
            Some("Study basic impact safety - placement, warm-up, and what bruising is normal.")
        }
        TraitAxis::Dominance | TraitAxis::Control => {
            Some("Read about negotiation frameworks; good control starts before the scene does.")
        }
        TraitAxis::Submission | TraitAxis::Service | TraitAxis::Pet => {
            Some("Practice naming limits out loud; yielding well is an active skill.")
        }
        TraitAxis::Degradation => {
            Some("Agree word-by-word on what language lands as play versus harm.")
        }
        TraitAxis::Exhibitionist | TraitAxis::Voyeur => {
            Some("Consent applies to audiences too; stick to spaces designed for it.")
        }
        _ => None,
    }
}
