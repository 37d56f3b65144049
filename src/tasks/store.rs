//! The task store: single source of truth for the task collection.
//!
//! All mutations go through the store; the rendering layer never edits task
//! fields directly. Every mutation replaces the collection wholesale
//! (copy-on-write), so snapshots handed out earlier stay valid, and then
//! persists the whole collection to the local store under a single key.
//!
//! Persistence is best-effort: a storage write failure is logged and
//! recorded but does not roll back the in-memory mutation. Callers that
//! want stricter behavior can inspect [`TaskStore::take_save_error`].

use crate::config::InsertPosition;
use crate::error::Error;
use crate::tasks::id::next_task_id;
use crate::tasks::models::{tasks_from_json, Task, TaskId};
use crate::traits::LocalStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// The fixed key under which the collection is persisted.
pub const STORAGE_KEY: &str = "todo-app";

/// In-memory ordered task collection with best-effort persistence.
#[derive(Debug)]
pub struct TaskStore<S: LocalStore> {
    /// Current collection snapshot. Replaced, never edited in place.
    tasks: Arc<Vec<Task>>,
    /// Backing key-value store.
    storage: S,
    /// Where new tasks are inserted.
    insert: InsertPosition,
    /// The most recent persistence failure, if any, since last inspected.
    last_save_error: Option<Error>,
}

impl<S: LocalStore> TaskStore<S> {
    /// Load the persisted collection from `storage`.
    ///
    /// Never fails: a missing key, unreadable storage, corrupt JSON, or a
    /// non-array value all degrade to the empty collection (with a warning
    /// on stderr for read failures). Structurally invalid elements are
    /// silently dropped.
    #[must_use]
    pub fn load(storage: S) -> Self {
        Self::load_with(storage, InsertPosition::default())
    }

    /// Load with an explicit insertion policy.
    #[must_use]
    pub fn load_with(storage: S, insert: InsertPosition) -> Self {
        let tasks = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => tasks_from_json(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                eprintln!("Warning: failed to load tasks from storage: {e}");
                Vec::new()
            }
        };

        Self { tasks: Arc::new(tasks), storage, insert, last_save_error: None }
    }

    /// Get a read-only snapshot of the collection.
    ///
    /// The snapshot is immutable and stays valid across later mutations.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Task>> {
        Arc::clone(&self.tasks)
    }

    /// View the current collection in order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Access the backing storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Take the most recent persistence failure, if one occurred.
    ///
    /// Best-effort durability: mutations report success even when the
    /// write failed. This is the observable channel for that outcome.
    pub fn take_save_error(&mut self) -> Option<Error> {
        self.last_save_error.take()
    }

    /// Add a task with the given text and optional due time.
    ///
    /// Returns the new task's id, or `None` if the text trims to empty or
    /// the due time is not strictly in the future.
    pub fn add(&mut self, text: &str, due_at: Option<DateTime<Utc>>) -> Option<TaskId> {
        self.add_at(text, due_at, Utc::now())
    }

    /// Add a task, validating the due time against an explicit `now`.
    pub fn add_at(
        &mut self,
        text: &str,
        due_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Some(due) = due_at {
            if due <= now {
                return None;
            }
        }

        let task = Task {
            id: next_task_id(),
            text: text.to_string(),
            completed: false,
            archived: false,
            due_at,
            reminded: false,
        };
        let id = task.id;

        let mut next: Vec<Task> = self.tasks.iter().cloned().collect();
        match self.insert {
            InsertPosition::Prepend => next.insert(0, task),
            InsertPosition::Append => next.push(task),
        }
        self.commit(next);

        Some(id)
    }

    /// Flip a task's completed flag. No-op if the id is unknown.
    ///
    /// Returns whether the task was found.
    pub fn toggle_completed(&mut self, id: TaskId) -> bool {
        self.replace(id, |task| Task { completed: !task.completed, ..task.clone() })
    }

    /// Update a task's text and/or due time. No-op if the id is unknown.
    ///
    /// Text that trims to empty is ignored (the original text is kept).
    /// A provided due time must be strictly in the future; setting it
    /// clears the `reminded` flag. Returns whether anything changed.
    pub fn update(
        &mut self,
        id: TaskId,
        new_text: Option<&str>,
        new_due_at: Option<DateTime<Utc>>,
    ) -> bool {
        self.update_at(id, new_text, new_due_at, Utc::now())
    }

    /// Update a task, validating the due time against an explicit `now`.
    pub fn update_at(
        &mut self,
        id: TaskId,
        new_text: Option<&str>,
        new_due_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        let text = new_text.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string);
        let due_at = new_due_at.filter(|&due| due > now);

        if text.is_none() && due_at.is_none() {
            return false;
        }

        self.replace(id, |task| {
            let mut updated = task.clone();
            if let Some(ref text) = text {
                updated.text.clone_from(text);
            }
            if let Some(due) = due_at {
                updated.due_at = Some(due);
                updated.reminded = false;
            }
            updated
        })
    }

    /// Archive a task (hide from the main list but keep it).
    ///
    /// No-op if the id is unknown. Returns whether the task was found.
    pub fn archive(&mut self, id: TaskId) -> bool {
        self.replace(id, |task| Task { archived: true, ..task.clone() })
    }

    /// Restore an archived task to the main list.
    ///
    /// No-op if the id is unknown. Returns whether the task was found.
    pub fn restore(&mut self, id: TaskId) -> bool {
        self.replace(id, |task| Task { archived: false, ..task.clone() })
    }

    /// Delete a task. No-op if the id is unknown.
    ///
    /// Returns whether the task was found and removed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        if self.get(id).is_none() {
            return false;
        }

        let next: Vec<Task> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.commit(next);
        true
    }

    /// Move a task to another task's current position.
    ///
    /// The moved task is removed and reinserted where the target currently
    /// sits; the target shifts by one. No-op if either id is missing or the
    /// ids are equal. Returns whether the reorder happened.
    pub fn reorder(&mut self, moved_id: TaskId, target_id: TaskId) -> bool {
        if moved_id == target_id || self.get(moved_id).is_none() || self.get(target_id).is_none() {
            return false;
        }

        let mut next: Vec<Task> = self.tasks.iter().cloned().collect();
        let from = next.iter().position(|t| t.id == moved_id).unwrap_or_default();
        let moved = next.remove(from);
        let to = next.iter().position(|t| t.id == target_id).unwrap_or_default();
        next.insert(to, moved);
        self.commit(next);
        true
    }

    /// Swap a task with its predecessor. No-op for the first task or an
    /// unknown id. Returns whether the swap happened.
    pub fn move_up(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        if index == 0 {
            return false;
        }

        let mut next: Vec<Task> = self.tasks.iter().cloned().collect();
        next.swap(index - 1, index);
        self.commit(next);
        true
    }

    /// Swap a task with its successor. No-op for the last task or an
    /// unknown id. Returns whether the swap happened.
    pub fn move_down(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        if index + 1 >= self.tasks.len() {
            return false;
        }

        let mut next: Vec<Task> = self.tasks.iter().cloned().collect();
        next.swap(index, index + 1);
        self.commit(next);
        true
    }

    /// Set the `reminded` flag on each listed task, persisting once.
    ///
    /// Used by the reminder engine so a poll cycle that flags several tasks
    /// writes the collection a single time.
    pub(crate) fn mark_reminded(&mut self, ids: &[TaskId]) -> bool {
        if ids.is_empty() {
            return false;
        }

        let next: Vec<Task> = self
            .tasks
            .iter()
            .map(|task| {
                if ids.contains(&task.id) {
                    Task { reminded: true, ..task.clone() }
                } else {
                    task.clone()
                }
            })
            .collect();
        self.commit(next);
        true
    }

    /// Replace one task by id with a new value, producing a new collection.
    fn replace(&mut self, id: TaskId, f: impl Fn(&Task) -> Task) -> bool {
        if self.get(id).is_none() {
            return false;
        }

        let next: Vec<Task> =
            self.tasks.iter().map(|t| if t.id == id { f(t) } else { t.clone() }).collect();
        self.commit(next);
        true
    }

    /// Install a new collection value and persist it.
    fn commit(&mut self, next: Vec<Task>) {
        self.tasks = Arc::new(next);
        self.save();
    }

    /// Serialize and write the whole collection, best-effort.
    fn save(&mut self) {
        let json = match serde_json::to_string(self.tasks.as_ref()) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Warning: failed to serialize tasks: {e}");
                self.last_save_error = Some(e.into());
                return;
            }
        };

        if let Err(e) = self.storage.set(STORAGE_KEY, &json) {
            eprintln!("Warning: failed to save tasks to storage: {e}");
            self.last_save_error = Some(e);
        }
    }
}
