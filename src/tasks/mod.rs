//! Task management core.
//!
//! This module owns the ordered task collection and all of its mutations:
//! - Tasks with text, completion, archival, and optional due times
//! - Best-effort persistence of the whole collection on every mutation
//! - Load-time structural validation that drops malformed entries
//! - Manual reordering (drag-to-reorder in the original UI)
//!
//! # Example
//!
//! ```
//! use tickler::tasks::TaskStore;
//! use tickler::testing::MemoryStore;
//!
//! let mut store = TaskStore::load(MemoryStore::new());
//! let id = store.add("Buy milk", None).unwrap();
//! store.toggle_completed(id);
//! assert!(store.get(id).unwrap().completed);
//! ```

pub mod id;
pub mod models;
pub mod store;

pub use id::next_task_id;
pub use models::{partition, tasks_from_json, Partitioned, Task, TaskId};
pub use store::{TaskStore, STORAGE_KEY};

use crate::traits::LocalStore;
use serde::{Deserialize, Serialize};

/// The key under which display flags are persisted.
pub const UI_FLAGS_KEY: &str = "ui-flags";

/// Collapsed/expanded state of the completed and archived list sections.
///
/// Persisted separately from the tasks themselves, under its own key, so
/// display preferences survive restarts without touching task data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiFlags {
    /// Whether the completed section is collapsed.
    #[serde(default)]
    pub completed_collapsed: bool,
    /// Whether the archived section is collapsed.
    #[serde(default)]
    pub archived_collapsed: bool,
}

impl UiFlags {
    /// Load the flags from the local store, defaulting on any failure.
    #[must_use]
    pub fn load<S: LocalStore>(storage: &S) -> Self {
        match storage.get(UI_FLAGS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Persist the flags, best-effort (failures are logged, not returned).
    pub fn save<S: LocalStore>(self, storage: &mut S) {
        let json = match serde_json::to_string(&self) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Warning: failed to serialize UI flags: {e}");
                return;
            }
        };
        if let Err(e) = storage.set(UI_FLAGS_KEY, &json) {
            eprintln!("Warning: failed to save UI flags: {e}");
        }
    }
}
