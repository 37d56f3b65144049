//! Integration tests for `tickler`.
//!
//! These exercise the full persistence path: a `TaskStore` over a real
//! `FileStore` in a temporary directory, reloaded between operations the
//! way separate program runs would see it.

use chrono::{Duration, Utc};
use serial_test::serial;
use tempfile::TempDir;
use tickler::tasks::id::{disable_deterministic_ids, enable_deterministic_ids};
use tickler::tasks::{partition, UiFlags, STORAGE_KEY};
use tickler::traits::LocalStore;
use tickler::{FileStore, InsertPosition, TaskStore, VERSION};

#[test]
fn test_version_exists() {
    assert!(!VERSION.is_empty());
}

#[test]
#[serial]
fn test_add_toggle_persist_reload() {
    enable_deterministic_ids();
    let dir = TempDir::new().unwrap();

    let mut store = TaskStore::load(FileStore::new(dir.path()));
    let id = store.add("Buy milk", None).unwrap();
    store.toggle_completed(id);

    // A fresh load from the same directory sees the completed task
    let reloaded = TaskStore::load(FileStore::new(dir.path()));
    assert_eq!(reloaded.tasks().len(), 1);
    assert!(reloaded.get(id).unwrap().completed);

    disable_deterministic_ids();
}

#[test]
#[serial]
fn test_archive_hides_restore_returns() {
    enable_deterministic_ids();
    let dir = TempDir::new().unwrap();

    let mut store = TaskStore::load(FileStore::new(dir.path()));
    let id = store.add("shelve me", None).unwrap();
    store.archive(id);

    let reloaded = TaskStore::load(FileStore::new(dir.path()));
    let sections = partition(reloaded.tasks());
    assert!(sections.active.is_empty());
    assert_eq!(sections.archived.len(), 1);

    let mut store = TaskStore::load(FileStore::new(dir.path()));
    store.restore(id);
    let sections_now = partition(store.tasks());
    assert_eq!(sections_now.active.len(), 1);
    assert!(sections_now.archived.is_empty());

    disable_deterministic_ids();
}

#[test]
#[serial]
fn test_reorder_survives_reload() {
    enable_deterministic_ids();
    let dir = TempDir::new().unwrap();

    let mut store = TaskStore::load_with(FileStore::new(dir.path()), InsertPosition::Append);
    let a = store.add("A", None).unwrap();
    store.add("B", None).unwrap();
    let c = store.add("C", None).unwrap();

    assert!(store.reorder(a, c));

    let reloaded = TaskStore::load(FileStore::new(dir.path()));
    let texts: Vec<_> = reloaded.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["B", "A", "C"]);

    disable_deterministic_ids();
}

#[test]
#[serial]
fn test_move_boundaries_are_noops_on_disk_too() {
    enable_deterministic_ids();
    let dir = TempDir::new().unwrap();

    let mut store = TaskStore::load_with(FileStore::new(dir.path()), InsertPosition::Append);
    let a = store.add("A", None).unwrap();
    let b = store.add("B", None).unwrap();

    assert!(!store.move_up(a));
    assert!(!store.move_down(b));

    let reloaded = TaskStore::load(FileStore::new(dir.path()));
    let texts: Vec<_> = reloaded.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["A", "B"]);

    disable_deterministic_ids();
}

#[test]
#[serial]
fn test_corrupt_storage_degrades_to_empty_and_recovers() {
    enable_deterministic_ids();
    let dir = TempDir::new().unwrap();

    let mut raw = FileStore::new(dir.path());
    raw.set(STORAGE_KEY, "{not json").unwrap();

    let mut store = TaskStore::load(FileStore::new(dir.path()));
    assert!(store.tasks().is_empty());

    // The first mutation overwrites the corrupt value with a valid one
    store.add("fresh start", None).unwrap();
    let reloaded = TaskStore::load(FileStore::new(dir.path()));
    assert_eq!(reloaded.tasks().len(), 1);

    disable_deterministic_ids();
}

#[test]
#[serial]
fn test_invalid_entries_dropped_on_load() {
    enable_deterministic_ids();
    let dir = TempDir::new().unwrap();

    let mut raw = FileStore::new(dir.path());
    raw.set(
        STORAGE_KEY,
        concat!(
            "[",
            r#"{"id":1,"text":"good","completed":false},"#,
            r#"{"id":"2","text":"bad id","completed":false},"#,
            r#"{"id":3,"completed":true},"#,
            r#"{"id":4,"text":"also good","completed":true}"#,
            "]"
        ),
    )
    .unwrap();

    let store = TaskStore::load(FileStore::new(dir.path()));
    let texts: Vec<_> = store.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["good", "also good"]);

    disable_deterministic_ids();
}

#[test]
#[serial]
fn test_reminder_fires_once_across_reloads() {
    enable_deterministic_ids();
    let dir = TempDir::new().unwrap();
    let now = Utc::now();

    let mut store = TaskStore::load(FileStore::new(dir.path()));
    store.add_at("Call mom", Some(now + Duration::minutes(5)), now).unwrap();

    let mut notifier = CollectingNotifier::default();
    let later = now + Duration::minutes(10);
    assert_eq!(tickler::reminder::poll(&mut store, &mut notifier, later), 1);
    assert_eq!(notifier.messages, vec!["Call mom is due for completion"]);

    // The reminded flag is persisted, so a fresh process does not re-fire
    let mut reloaded = TaskStore::load(FileStore::new(dir.path()));
    assert_eq!(tickler::reminder::poll(&mut reloaded, &mut notifier, later), 0);
    assert_eq!(notifier.messages.len(), 1);

    disable_deterministic_ids();
}

#[test]
#[serial]
fn test_due_at_round_trips_in_camel_case() {
    enable_deterministic_ids();
    let dir = TempDir::new().unwrap();
    let now = Utc::now();
    let due = now + Duration::hours(3);

    let mut store = TaskStore::load(FileStore::new(dir.path()));
    let id = store.add_at("with due", Some(due), now).unwrap();

    let raw = FileStore::new(dir.path()).get(STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains("\"dueAt\""));
    assert!(!raw.contains("\"due_at\""));

    let reloaded = TaskStore::load(FileStore::new(dir.path()));
    assert_eq!(reloaded.get(id).unwrap().due_at, Some(due));

    disable_deterministic_ids();
}

#[test]
fn test_ui_flags_persist_separately_from_tasks() {
    let dir = TempDir::new().unwrap();
    let mut storage = FileStore::new(dir.path());

    let flags = UiFlags { completed_collapsed: true, archived_collapsed: false };
    flags.save(&mut storage);

    // Task storage is untouched by flag writes
    assert!(storage.get(STORAGE_KEY).unwrap().is_none());
    assert_eq!(UiFlags::load(&FileStore::new(dir.path())), flags);
}

/// Minimal notifier for integration-level reminder checks.
#[derive(Default)]
struct CollectingNotifier {
    messages: Vec<String>,
}

impl tickler::Notifier for CollectingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
