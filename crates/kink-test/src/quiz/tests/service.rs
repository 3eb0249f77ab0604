use std::sync::Arc;

use super::common::*;
use crate::quiz::catalog::ArchetypeCatalog;
use crate::quiz::classify::ClassifierConfig;
use crate::quiz::bank::QuestionBank;
use crate::quiz::domain::TraitAxis;
use crate::quiz::result::ResultId;
use crate::quiz::service::{QuizService, QuizServiceError};
use crate::store::{MemoryResultStore, StoreError};

#[test]
fn submit_persists_and_result_loads_back() {
    let (_store, service) = memory_service();

    let outcome = service
        .submit(&dominant_answers())
        .expect("submission succeeds");
    assert!(outcome.persisted);
    assert_eq!(outcome.result.primary.id, "dominant");

    let loaded = service
        .result(&outcome.result.id)
        .expect("stored result loads");
    assert_eq!(loaded, outcome.result);
}

#[test]
fn storage_outage_still_yields_a_complete_result() {
    let service = QuizService::new(Arc::new(UnavailableStore));

    let outcome = service
        .submit(&dominant_answers())
        .expect("submission survives the outage");

    assert!(!outcome.persisted);
    assert!(outcome.result.scores.get(TraitAxis::Dominance) > 0.0);
    assert!(!outcome.result.next_steps.is_empty());
}

#[test]
fn missing_result_surfaces_store_not_found() {
    let (_store, service) = memory_service();
    let missing = ResultId("11111111-2222-3333-4444-555555555555".to_string());

    match service.result(&missing) {
        Err(QuizServiceError::Store(StoreError::NotFound)) => {}
        other => panic!("expected not-found, got {other:?}"),
    }
}

#[test]
fn empty_catalog_is_a_service_error() {
    let service = QuizService::with_parts(
        QuestionBank::standard(),
        ArchetypeCatalog::from_entries(Vec::new()),
        ClassifierConfig::default(),
        Arc::new(MemoryResultStore::new()),
    );

    match service.submit(&dominant_answers()) {
        Err(QuizServiceError::EmptyCatalog) => {}
        other => panic!("expected empty-catalog error, got {other:?}"),
    }
}

#[test]
fn submitting_no_answers_still_produces_a_full_result() {
    let (_store, service) = memory_service();

    let outcome = service.submit(&[]).expect("empty submission is valid");
    for axis in TraitAxis::ordered() {
        assert_eq!(outcome.result.scores.get(axis), 0.0);
    }
    assert_eq!(outcome.result.confidence, 0.0);
}
