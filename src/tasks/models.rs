//! Task model types and wire-format validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique task identifier.
///
/// Assigned at creation, derived from the creation instant's millisecond
/// timestamp, never reused or mutated. Treat as an opaque unique token.
pub type TaskId = i64;

/// A single to-do item.
///
/// Wire format uses the camelCase field names of the persisted store:
/// `id`, `text`, and `completed` are required; `archived`, `dueAt`, and
/// `reminded` are optional and default to absent/false. Elements that fail
/// this shape are dropped on load rather than surfaced as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier.
    pub id: TaskId,
    /// Human-readable task text; non-empty after trimming.
    pub text: String,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Whether the task is archived (hidden from the main list but kept).
    #[serde(default)]
    pub archived: bool,
    /// When the task is due, if a due time was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,
    /// Whether the due-time reminder has already fired for this task.
    #[serde(default)]
    pub reminded: bool,
}

impl Task {
    /// Check if the task's due time has passed.
    ///
    /// A task with no due time is never overdue.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_at.is_some_and(|due| due <= now)
    }

    /// Check if the task should trigger a reminder at `now`.
    ///
    /// True only for tasks with a due time at or before `now` that are not
    /// completed, not archived, and have not already been reminded.
    #[must_use]
    pub fn needs_reminder(&self, now: DateTime<Utc>) -> bool {
        !self.completed && !self.archived && !self.reminded && self.is_overdue(now)
    }
}

/// The three display sections of a task list snapshot.
#[derive(Debug, Clone, Default)]
pub struct Partitioned<'a> {
    /// Tasks that are neither completed nor archived.
    pub active: Vec<&'a Task>,
    /// Completed, non-archived tasks.
    pub completed: Vec<&'a Task>,
    /// Archived tasks (completed or not).
    pub archived: Vec<&'a Task>,
}

/// Partition a snapshot into active / completed / archived sections,
/// preserving collection order within each section.
#[must_use]
pub fn partition(tasks: &[Task]) -> Partitioned<'_> {
    let mut sections = Partitioned::default();
    for task in tasks {
        if task.archived {
            sections.archived.push(task);
        } else if task.completed {
            sections.completed.push(task);
        } else {
            sections.active.push(task);
        }
    }
    sections
}

/// Parse a persisted collection, dropping invalid entries.
///
/// Returns the empty collection if `raw` is not valid JSON or not an array.
/// Each element is validated structurally (required fields present, correct
/// types); offending elements are silently dropped and valid ones kept.
#[must_use]
pub fn tasks_from_json(raw: &str) -> Vec<Task> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) else {
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items.iter().filter_map(|item| serde_json::from_value(item.clone()).ok()).collect()
}
