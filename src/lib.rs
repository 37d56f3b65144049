//! # `tickler`
//!
//! A local to-do list core: an in-memory ordered task list persisted to a
//! per-user key-value store, with due-date reminders that fire once per
//! task. The display layer is a thin CLI; all state lives in
//! [`tasks::TaskStore`].

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod paths;
pub mod reminder;
pub mod storage;
pub mod tasks;
pub mod testing;
pub mod traits;

pub use config::{AppConfig, InsertPosition};
pub use error::{Error, Result};
pub use storage::FileStore;
pub use tasks::{Task, TaskId, TaskStore};
pub use traits::{ConsoleNotifier, LocalStore, Notifier};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
