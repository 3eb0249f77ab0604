use super::domain::TraitAxis;
use serde::Serialize;

/// One selectable option and the trait weights it contributes. Weights are
/// arbitrary reals; negative weights pull an axis back toward zero.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerOption {
    pub id: &'static str,
    pub label: &'static str,
    pub weights: &'static [(TraitAxis, f32)],
}

impl AnswerOption {
    pub fn weight(&self, axis: TraitAxis) -> f32 {
        self.weights
            .iter()
            .find(|(candidate, _)| *candidate == axis)
            .map(|(_, weight)| *weight)
            .unwrap_or(0.0)
    }
}

/// An immutable quiz question with its ordered options.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

/// The build-time question set the scoring engine runs against.
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    /// Bank assembled from explicit questions, for tests and previews.
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn find(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }
}

fn standard_questions() -> Vec<Question> {
    use TraitAxis::*;

    vec![
        Question {
            id: "role",
            prompt: "In an intimate dynamic, which role feels most natural to you?",
            options: vec![
                AnswerOption {
                    id: "lead",
                    label: "Lead and guide your partner",
                    weights: &[(Dominance, 0.8), (Caregiver, 0.6)],
                },
                AnswerOption {
                    id: "follow",
                    label: "Follow your partner's lead",
                    weights: &[(Submission, 0.8), (Service, 0.4)],
                },
                AnswerOption {
                    id: "trade",
                    label: "Trade the lead back and forth",
                    weights: &[(Switch, 0.9)],
                },
                AnswerOption {
                    id: "equal",
                    label: "Keep things familiar and equal",
                    weights: &[(Vanilla, 0.8)],
                },
            ],
        },
        Question {
            id: "control",
            prompt: "How do you feel about giving up control?",
            options: vec![
                AnswerOption {
                    id: "thrilling",
                    label: "Thrilling - I relax when someone else decides",
                    weights: &[(Submission, 0.7), (Pet, 0.3)],
                },
                AnswerOption {
                    id: "uneasy",
                    label: "Uneasy - I would rather hold the reins",
                    weights: &[(Dominance, 0.6), (Control, 0.7)],
                },
                AnswerOption {
                    id: "depends",
                    label: "Depends entirely on the day and the partner",
                    weights: &[(Switch, 0.6)],
                },
                AnswerOption {
                    id: "neither",
                    label: "I prefer that neither of us holds it",
                    weights: &[(Vanilla, 0.5), (Submission, -0.2)],
                },
            ],
        },
        Question {
            id: "sensation",
            prompt: "What draws you most about intense sensation?",
            options: vec![
                AnswerOption {
                    id: "deliver",
                    label: "Delivering it and staying in charge of the pace",
                    weights: &[(Sadism, 0.8), (Dominance, 0.3)],
                },
                AnswerOption {
                    id: "receive",
                    label: "Receiving it and riding the wave",
                    weights: &[(Masochism, 0.8)],
                },
                AnswerOption {
                    id: "watch",
                    label: "Watching a partner's reactions up close",
                    weights: &[(Sadism, 0.4), (Voyeur, 0.3)],
                },
                AnswerOption {
                    id: "skip",
                    label: "Not my thing - gentle suits me better",
                    weights: &[(Vanilla, 0.7), (Sadism, -0.3), (Masochism, -0.3)],
                },
            ],
        },
        Question {
            id: "words",
            prompt: "Which kind of words land best during play?",
            options: vec![
                AnswerOption {
                    id: "praise",
                    label: "Warm praise and encouragement",
                    weights: &[(Praise, 0.9), (Caregiver, 0.3)],
                },
                AnswerOption {
                    id: "tease",
                    label: "Sharp teasing and degradation",
                    weights: &[(Degradation, 0.8), (Bratty, 0.2)],
                },
                AnswerOption {
                    id: "orders",
                    label: "Clear, confident instructions",
                    weights: &[(Control, 0.7), (Dominance, 0.4)],
                },
                AnswerOption {
                    id: "quiet",
                    label: "Few words - actions say enough",
                    weights: &[(Vanilla, 0.4)],
                },
            ],
        },
        Question {
            id: "restraint",
            prompt: "How appealing is rope or restraint?",
            options: vec![
                AnswerOption {
                    id: "tie",
                    label: "I love the craft of tying",
                    weights: &[(Rope, 0.8), (Control, 0.4), (Dominance, 0.3)],
                },
                AnswerOption {
                    id: "tied",
                    label: "I love the stillness of being tied",
                    weights: &[(Rope, 0.7), (Submission, 0.4)],
                },
                AnswerOption {
                    id: "curious",
                    label: "Curious, but I would start slowly",
                    weights: &[(Rope, 0.4), (Switch, 0.2)],
                },
                AnswerOption {
                    id: "pass",
                    label: "Restraint is not appealing to me",
                    weights: &[(Rope, -0.5), (Vanilla, 0.4)],
                },
            ],
        },
        Question {
            id: "caring",
            prompt: "What is your favorite way to care for a partner?",
            options: vec![
                AnswerOption {
                    id: "structure",
                    label: "Providing structure, rules, and reassurance",
                    weights: &[(Caregiver, 0.7), (Control, 0.5)],
                },
                AnswerOption {
                    id: "serve",
                    label: "Anticipating needs and acts of service",
                    weights: &[(Service, 0.8), (Submission, 0.3)],
                },
                AnswerOption {
                    id: "mischief",
                    label: "Playful mischief that earns their full attention",
                    weights: &[(Bratty, 0.8), (Pet, 0.3)],
                },
                AnswerOption {
                    id: "affection",
                    label: "Simple, steady affection",
                    weights: &[(Vanilla, 0.5), (Praise, 0.3)],
                },
            ],
        },
        Question {
            id: "audience",
            prompt: "How do you feel about being seen?",
            options: vec![
                AnswerOption {
                    id: "perform",
                    label: "An audience makes everything sharper",
                    weights: &[(Exhibitionist, 0.9)],
                },
                AnswerOption {
                    id: "observe",
                    label: "I would much rather watch",
                    weights: &[(Voyeur, 0.9)],
                },
                AnswerOption {
                    id: "both",
                    label: "Either, in the right mood",
                    weights: &[(Exhibitionist, 0.4), (Voyeur, 0.4), (Switch, 0.2)],
                },
                AnswerOption {
                    id: "private",
                    label: "Strictly private, always",
                    weights: &[(Exhibitionist, -0.4), (Voyeur, -0.2), (Vanilla, 0.5)],
                },
            ],
        },
        Question {
            id: "persona",
            prompt: "Which playful persona appeals to you most?",
            options: vec![
                AnswerOption {
                    id: "pet",
                    label: "A devoted pet with a favorite person",
                    weights: &[(Pet, 0.8), (Submission, 0.4)],
                },
                AnswerOption {
                    id: "handler",
                    label: "The patient handler who sets the tone",
                    weights: &[(Caregiver, 0.6), (Dominance, 0.4), (Control, 0.3)],
                },
                AnswerOption {
                    id: "brat",
                    label: "The defiant brat who tests every rule",
                    weights: &[(Bratty, 0.9)],
                },
                AnswerOption {
                    id: "none",
                    label: "Personas are not really for me",
                    weights: &[(Vanilla, 0.6)],
                },
            ],
        },
        Question {
            id: "structure",
            prompt: "How much structure do you want in a dynamic?",
            options: vec![
                AnswerOption {
                    id: "set-rules",
                    label: "Detailed rules that I write and enforce",
                    weights: &[(Control, 0.8), (Dominance, 0.5)],
                },
                AnswerOption {
                    id: "given-rules",
                    label: "Rules set for me that I get to keep",
                    weights: &[(Submission, 0.6), (Service, 0.5), (Pet, 0.2)],
                },
                AnswerOption {
                    id: "rituals",
                    label: "Light rituals and check-ins",
                    weights: &[(Praise, 0.4), (Caregiver, 0.3), (Switch, 0.2)],
                },
                AnswerOption {
                    id: "loose",
                    label: "No formal structure at all",
                    weights: &[(Vanilla, 0.6), (Control, -0.3)],
                },
            ],
        },
        Question {
            id: "aftercare",
            prompt: "After an intense scene, what do you need most?",
            options: vec![
                AnswerOption {
                    id: "comfort",
                    label: "To wrap my partner up and provide comfort",
                    weights: &[(Caregiver, 0.8), (Service, 0.4)],
                },
                AnswerOption {
                    id: "held",
                    label: "To be held and told I did well",
                    weights: &[(Praise, 0.6), (Submission, 0.3), (Masochism, 0.2)],
                },
                AnswerOption {
                    id: "debrief",
                    label: "A little space, then an honest debrief",
                    weights: &[(Switch, 0.3), (Control, 0.3)],
                },
                AnswerOption {
                    id: "mellow",
                    label: "We keep things mellow enough not to need it",
                    weights: &[(Vanilla, 0.5)],
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bank_covers_every_axis() {
        let bank = QuestionBank::standard();
        for axis in TraitAxis::ordered() {
            let touched = bank.questions().iter().any(|question| {
                question
                    .options
                    .iter()
                    .any(|option| option.weight(axis) > 0.0)
            });
            assert!(touched, "axis {:?} has no positive contribution", axis);
        }
    }

    #[test]
    fn option_ids_are_unique_within_each_question() {
        let bank = QuestionBank::standard();
        for question in bank.questions() {
            for option in &question.options {
                let matches = question
                    .options
                    .iter()
                    .filter(|candidate| candidate.id == option.id)
                    .count();
                assert_eq!(matches, 1, "duplicate option id in {}", question.id);
            }
        }
    }
}
