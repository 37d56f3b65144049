//! Command-line interface for tickler.
//!
//! The CLI is the rendering layer collaborator: it turns user input into
//! task store mutations and re-reads the snapshot after each call. It never
//! edits task fields directly.

mod run;

pub use run::run;

use clap::{Parser, Subcommand, ValueEnum};

/// tickler - a local to-do list with due-date reminders.
#[derive(Parser, Debug)]
#[command(name = "tickler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Direction for moving a task within the list.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Swap with the previous task.
    Up,
    /// Swap with the next task.
    Down,
}

/// Collapsible list section.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The completed-tasks section.
    Completed,
    /// The archived-tasks section.
    Archived,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a task.
    ///
    /// The text must be non-empty; a due time, if given, must be in the
    /// future. Accepts RFC 3339 ("2026-09-01T17:00:00Z") or local
    /// "YYYY-MM-DD HH:MM" due times.
    Add {
        /// Task text
        text: String,

        /// Due time for the task
        #[arg(long)]
        due: Option<String>,
    },

    /// List tasks, grouped into active / completed / archived sections.
    List {
        /// Show collapsed sections too
        #[arg(long)]
        all: bool,
    },

    /// Toggle a task's completed state.
    Toggle {
        /// Task id
        id: i64,
    },

    /// Edit a task's text and/or due time.
    ///
    /// Empty text is ignored (the original is kept). Setting a new due
    /// time re-arms the task's reminder.
    Edit {
        /// Task id
        id: i64,

        /// Replacement text
        #[arg(long)]
        text: Option<String>,

        /// Replacement due time
        #[arg(long)]
        due: Option<String>,
    },

    /// Archive a task (hidden from the main list, but kept).
    Archive {
        /// Task id
        id: i64,
    },

    /// Restore an archived task.
    Restore {
        /// Task id
        id: i64,
    },

    /// Delete a task.
    Delete {
        /// Task id
        id: i64,
    },

    /// Move a task up or down by one position.
    #[command(name = "move")]
    Move {
        /// Task id
        id: i64,

        /// Direction to move
        direction: Direction,
    },

    /// Move one task to another task's position.
    Reorder {
        /// Id of the task to move
        moved_id: i64,

        /// Id of the task whose position it takes
        target_id: i64,
    },

    /// Toggle a section's collapsed state for `list`.
    Collapse {
        /// Which section to collapse or expand
        section: Section,
    },

    /// Watch for due tasks, printing a reminder once per task.
    ///
    /// Runs until interrupted, polling on a fixed interval.
    Watch {
        /// Poll interval in seconds (overrides configuration)
        #[arg(long)]
        interval: Option<u64>,
    },
}
