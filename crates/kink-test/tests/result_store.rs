//! Persistence specifications exercised through the durable file store,
//! including the soft-failure paths the UI depends on.

use std::fs;
use std::sync::Arc;

use kink_test::quiz::{Answer, QuizService, QuizServiceError, ResultId};
use kink_test::presentation::{present, ResultPresentation};
use kink_test::store::{FileResultStore, ResultStore, StoreError};

fn answers() -> Vec<Answer> {
    vec![
        Answer::new("role", "lead"),
        Answer::new("words", "orders"),
        Answer::new("structure", "set-rules"),
    ]
}

#[test]
fn results_survive_a_new_store_handle_over_the_same_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = QuizService::new(Arc::new(FileResultStore::new(dir.path())));

    let outcome = service.submit(&answers()).expect("submission succeeds");
    assert!(outcome.persisted);

    // A fresh handle simulates a later process reading the same storage.
    let reopened = FileResultStore::new(dir.path());
    let loaded = reopened.load(&outcome.result.id).expect("load succeeds");
    assert_eq!(loaded, outcome.result);
}

#[test]
fn cleared_storage_reads_as_not_found_and_presents_a_retake() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = Arc::new(FileResultStore::new(dir.path()));
    let service = QuizService::new(store.clone());

    let outcome = service.submit(&answers()).expect("submission succeeds");
    let path = dir
        .path()
        .join(format!("result_{}.json", outcome.result.id.0));
    fs::remove_file(&path).expect("simulate cleared storage");

    match service.result(&outcome.result.id) {
        Err(QuizServiceError::Store(StoreError::NotFound)) => {}
        other => panic!("expected not-found, got {other:?}"),
    }

    match present(store.as_ref(), &outcome.result.id).expect("absence is recoverable") {
        ResultPresentation::Retake { .. } => {}
        other => panic!("expected retake presentation, got {other:?}"),
    }
}

#[test]
fn corrupt_payload_is_indistinguishable_from_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = FileResultStore::new(dir.path());
    let service = QuizService::new(Arc::new(store.clone()));

    let outcome = service.submit(&answers()).expect("submission succeeds");
    let path = dir
        .path()
        .join(format!("result_{}.json", outcome.result.id.0));
    fs::write(&path, b"\x00\x01 definitely not json").expect("corrupt the payload");

    assert!(matches!(
        store.load(&outcome.result.id),
        Err(StoreError::NotFound)
    ));
}

#[test]
fn unwritable_storage_still_returns_an_ephemeral_result() {
    let dir = tempfile::tempdir().expect("temp dir");
    let blocker = dir.path().join("occupied");
    fs::write(&blocker, b"flat file").expect("write blocker");

    // Pointing the store below a plain file makes every write fail.
    let service = QuizService::new(Arc::new(FileResultStore::new(blocker.join("results"))));

    let outcome = service.submit(&answers()).expect("submission survives");
    assert!(!outcome.persisted);
    assert_eq!(outcome.result.primary.id, "dominant");
}

#[test]
fn identifiers_never_collide_across_submissions() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = QuizService::new(Arc::new(FileResultStore::new(dir.path())));

    let mut seen = std::collections::HashSet::new();
    for _ in 0..20 {
        let outcome = service.submit(&answers()).expect("submission succeeds");
        assert!(seen.insert(outcome.result.id.clone()), "duplicate id");
    }
}

#[test]
fn never_saved_identifier_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = FileResultStore::new(dir.path());
    let missing = ResultId("aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee".to_string());
    assert!(matches!(store.load(&missing), Err(StoreError::NotFound)));
}
