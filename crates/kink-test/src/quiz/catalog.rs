use super::domain::TraitAxis;
use serde::Serialize;

/// A catalog archetype and the trait signature that defines it. Signature
/// weights are positive; the classifier normalizes by their sum, so the
/// absolute scale of a signature does not matter, only its shape.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalityType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub signature: &'static [(TraitAxis, f32)],
}

/// Fixed reference catalog the classifier matches against. Declaration order
/// doubles as the tie-break order, so keep it stable.
#[derive(Debug)]
pub struct ArchetypeCatalog {
    entries: Vec<PersonalityType>,
}

impl ArchetypeCatalog {
    pub fn standard() -> Self {
        Self {
            entries: standard_archetypes(),
        }
    }

    pub fn from_entries(entries: Vec<PersonalityType>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PersonalityType] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&PersonalityType> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

fn standard_archetypes() -> Vec<PersonalityType> {
    use TraitAxis::*;

    vec![
        PersonalityType {
            id: "dominant",
            name: "The Dominant",
            description: "You are happiest setting the tone and taking responsibility for a scene. \
                          Partners lean on your decisiveness, and you take that trust seriously.",
            signature: &[(Dominance, 1.0), (Control, 0.7), (Caregiver, 0.3)],
        },
        PersonalityType {
            id: "submissive",
            name: "The Submissive",
            description: "Handing over the reins is where you find focus and release. Clear \
                          expectations and an attentive partner bring out your best.",
            signature: &[(Submission, 1.0), (Service, 0.6), (Praise, 0.4)],
        },
        PersonalityType {
            id: "switch",
            name: "The Switch",
            description: "You move comfortably between leading and following, and the contrast \
                          itself is part of the appeal. Range is your signature.",
            signature: &[(Switch, 1.0), (Dominance, 0.4), (Submission, 0.4)],
        },
        PersonalityType {
            id: "sadist",
            name: "The Sadist",
            description: "Controlled intensity fascinates you, and reading a partner's responses \
                          is a skill you keep sharpening. Calibration matters more to you than force.",
            signature: &[(Sadism, 1.0), (Dominance, 0.5), (Degradation, 0.4)],
        },
        PersonalityType {
            id: "masochist",
            name: "The Masochist",
            description: "Strong sensation helps you drop out of your head and into the moment. \
                          You know your limits well and value a partner who respects the map.",
            signature: &[(Masochism, 1.0), (Submission, 0.5), (Praise, 0.2)],
        },
        PersonalityType {
            id: "caregiver",
            name: "The Caregiver",
            description: "Providing structure, warmth, and steady reassurance is your core mode. \
                          A partner flourishing under your care is the point of the exercise.",
            signature: &[(Caregiver, 1.0), (Praise, 0.6), (Control, 0.5)],
        },
        PersonalityType {
            id: "brat",
            name: "The Brat",
            description: "Rules exist so you can test them, and the push-pull of earned \
                          consequences is your favorite game. You want a partner who plays back.",
            signature: &[(Bratty, 1.0), (Masochism, 0.3), (Pet, 0.3)],
        },
        PersonalityType {
            id: "pet",
            name: "The Pet",
            description: "Devotion, play, and a clear favorite person define your style. \
                          Affectionate structure suits you better than formality.",
            signature: &[(Pet, 1.0), (Submission, 0.6), (Praise, 0.5)],
        },
        PersonalityType {
            id: "rigger",
            name: "The Rope Enthusiast",
            description: "Rope is your medium, whether you are tying or being tied. Patience, \
                          precision, and trust are what draw you to it.",
            signature: &[(Rope, 1.0), (Control, 0.4), (Switch, 0.2)],
        },
        PersonalityType {
            id: "performer",
            name: "The Performer",
            description: "Being seen turns the intensity up for you. An appreciative audience, \
                          even of one, makes everything land harder.",
            signature: &[(Exhibitionist, 1.0), (Voyeur, 0.4), (Bratty, 0.2)],
        },
        PersonalityType {
            id: "observer",
            name: "The Observer",
            description: "Watching is not a consolation prize for you - it is the main event. \
                          You notice details that participants miss.",
            signature: &[(Voyeur, 1.0), (Exhibitionist, 0.3), (Control, 0.2)],
        },
        PersonalityType {
            id: "romantic",
            name: "The Romantic",
            description: "Familiar intimacy, warmth, and connection matter more to you than \
                          novelty. Depth over spectacle, every time.",
            signature: &[(Vanilla, 1.0), (Praise, 0.5), (Caregiver, 0.3)],
        },
    ]
}
