//! Quiz core: question bank, scoring, archetype classification, and result
//! assembly. Everything in here is pure and deterministic except the uuid
//! minted at result assembly; persistence lives in [`crate::store`].

pub mod analysis;
pub mod bank;
pub mod catalog;
pub mod classify;
pub mod domain;
pub mod result;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use analysis::{DetailedAnalysis, Recommendations};
pub use bank::{AnswerOption, Question, QuestionBank};
pub use catalog::{ArchetypeCatalog, PersonalityType};
pub use classify::{classify, Classification, ClassifierConfig};
pub use domain::{Answer, TraitAxis, TraitScores};
pub use result::{ArchetypeSnapshot, ResultId, TestResult};
pub use router::quiz_router;
pub use scoring::score;
pub use service::{QuizService, QuizServiceError, SubmissionOutcome};
