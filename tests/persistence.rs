//! End-to-end store behavior over a real temp file
//!
//! Exercises a full session (add, complete, delete, re-add) and the
//! restart/recovery paths the store promises.

use std::fs;

use taskline::task::{Completion, LoadOutcome, StoreError, TaskStore};
use tempfile::tempdir;

#[test]
fn full_session_scenario() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let (mut store, outcome) = TaskStore::open(&path);
    assert_eq!(outcome, LoadOutcome::Fresh);

    let id1 = store.add("buy milk").unwrap();
    assert_eq!(id1, 1);
    assert_eq!(store.counts().pending, 1);

    let id2 = store.add("write report").unwrap();
    assert_eq!(id2, 2);

    match store.complete(id1).unwrap() {
        Completion::Completed(task) => assert_eq!(task.id, 1),
        other => panic!("expected Completed, got {:?}", other),
    }
    assert!(!store.find_by_id(id2).unwrap().completed);

    let counts = store.counts();
    assert_eq!(counts.total, 2);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.completed, 1);

    store.delete(id2).unwrap();
    let counts = store.counts();
    assert_eq!(counts.total, 1);
    assert_eq!(counts.pending, 0);
    assert_eq!(counts.completed, 1);

    let id3 = store.add("new task").unwrap();
    assert_eq!(id3, 3, "deleted id 2 must not be reassigned");
}

#[test]
fn restart_reproduces_saved_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let saved = {
        let (mut store, _) = TaskStore::open(&path);
        store.add("buy milk").unwrap();
        store.add("write report").unwrap();
        store.complete(1).unwrap();
        store.tasks().to_vec()
    };

    let (reloaded, outcome) = TaskStore::open(&path);
    assert_eq!(outcome, LoadOutcome::Loaded(2));
    assert_eq!(reloaded.tasks(), saved.as_slice());

    // Ids keep climbing from the persisted maximum.
    assert_eq!(reloaded.next_id(), 3);
}

#[test]
fn malformed_document_degrades_to_empty_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    fs::write(&path, "not json at all").unwrap();

    let (mut store, outcome) = TaskStore::open(&path);
    assert_eq!(outcome, LoadOutcome::Corrupt);
    assert!(store.tasks().is_empty());

    // The corrupt document is only replaced once something is saved.
    assert_eq!(fs::read_to_string(&path).unwrap(), "not json at all");
    store.add("recovered").unwrap();
    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(on_disk.contains("recovered"));
}

#[test]
fn rejected_add_leaves_document_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let (mut store, _) = TaskStore::open(&path);
    store.add("buy milk").unwrap();
    let before = fs::read_to_string(&path).unwrap();

    assert!(matches!(
        store.add("   "),
        Err(StoreError::EmptyDescription)
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}
