//! Command dispatch and list rendering.

use crate::cli::{Cli, Command, Direction, Section};
use crate::config::AppConfig;
use crate::error::Result;
use crate::format::format_remaining;
use crate::storage::FileStore;
use crate::tasks::{partition, Task, TaskStore, UiFlags};
use crate::traits::ConsoleNotifier;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use std::process::ExitCode;
use std::time::Duration;

/// Execute a parsed CLI invocation.
///
/// Returns `ExitCode::FAILURE` for rejected mutations (empty text, past
/// due time, unknown id, boundary moves) so scripts can detect them; the
/// store itself treats those as silent no-ops.
///
/// # Errors
///
/// Returns an error if the data directory cannot be determined or the
/// configuration file is invalid.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let Some(storage) = FileStore::in_data_dir() else {
        return Err(std::io::Error::other("could not determine home directory").into());
    };
    let config = AppConfig::load()?;
    let mut store = TaskStore::load_with(storage, config.insert);

    let code = match cli.command {
        Command::Add { text, due } => {
            let due_at = due.as_deref().map(parse_due).transpose()?;
            match store.add(&text, due_at) {
                Some(id) => {
                    println!("Added task {id}");
                    ExitCode::SUCCESS
                }
                None => {
                    eprintln!("Rejected: text must be non-empty and due time in the future");
                    ExitCode::FAILURE
                }
            }
        }

        Command::List { all } => {
            let flags = UiFlags::load(store.storage());
            render_list(store.tasks(), flags, all);
            ExitCode::SUCCESS
        }

        Command::Toggle { id } => found(store.toggle_completed(id), id),

        Command::Edit { id, text, due } => {
            let due_at = due.as_deref().map(parse_due).transpose()?;
            if store.update(id, text.as_deref(), due_at) {
                ExitCode::SUCCESS
            } else {
                eprintln!("No change applied to task {id}");
                ExitCode::FAILURE
            }
        }

        Command::Archive { id } => found(store.archive(id), id),
        Command::Restore { id } => found(store.restore(id), id),
        Command::Delete { id } => found(store.delete(id), id),

        Command::Move { id, direction } => {
            let moved = match direction {
                Direction::Up => store.move_up(id),
                Direction::Down => store.move_down(id),
            };
            if moved {
                ExitCode::SUCCESS
            } else {
                eprintln!("Cannot move task {id}");
                ExitCode::FAILURE
            }
        }

        Command::Reorder { moved_id, target_id } => {
            if store.reorder(moved_id, target_id) {
                ExitCode::SUCCESS
            } else {
                eprintln!("Cannot reorder: ids must be distinct existing tasks");
                ExitCode::FAILURE
            }
        }

        Command::Collapse { section } => {
            let mut flags = UiFlags::load(store.storage());
            let collapsed = match section {
                Section::Completed => {
                    flags.completed_collapsed = !flags.completed_collapsed;
                    flags.completed_collapsed
                }
                Section::Archived => {
                    flags.archived_collapsed = !flags.archived_collapsed;
                    flags.archived_collapsed
                }
            };
            let mut storage = store.storage().clone();
            flags.save(&mut storage);
            println!("Section is now {}", if collapsed { "collapsed" } else { "expanded" });
            ExitCode::SUCCESS
        }

        Command::Watch { interval } => {
            let secs = interval.unwrap_or(config.poll_interval_secs);
            let mut notifier = ConsoleNotifier;
            crate::reminder::run(
                &mut store,
                &mut notifier,
                Duration::from_secs(secs),
                |fired| println!("({fired} reminder(s) fired; list refreshed)"),
            )
        }
    };

    Ok(code)
}

/// Map a found/not-found mutation result to an exit code.
fn found(ok: bool, id: i64) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        eprintln!("No task with id {id}");
        ExitCode::FAILURE
    }
}

/// Parse a due time from RFC 3339 or local "YYYY-MM-DD HH:MM".
fn parse_due(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").map_err(|_| {
        std::io::Error::other(format!(
            "invalid due time '{raw}': expected RFC 3339 or YYYY-MM-DD HH:MM"
        ))
    })?;
    let local = Local.from_local_datetime(&naive).earliest().ok_or_else(|| {
        std::io::Error::other(format!("due time '{raw}' does not exist in the local timezone"))
    })?;
    Ok(local.with_timezone(&Utc))
}

/// Print the task list grouped into sections.
fn render_list(tasks: &[Task], flags: UiFlags, show_all: bool) {
    let sections = partition(tasks);
    let now = Utc::now();

    println!("Tasks ({})", sections.active.len());
    for task in &sections.active {
        println!("{}", render_task(task, now));
    }

    println!();
    if flags.completed_collapsed && !show_all {
        println!("Completed ({}) [collapsed]", sections.completed.len());
    } else {
        println!("Completed ({})", sections.completed.len());
        for task in &sections.completed {
            println!("{}", render_task(task, now));
        }
    }

    if sections.archived.is_empty() {
        return;
    }
    println!();
    if flags.archived_collapsed && !show_all {
        println!("Archived ({}) [collapsed]", sections.archived.len());
    } else {
        println!("Archived ({})", sections.archived.len());
        for task in &sections.archived {
            println!("{}", render_task(task, now));
        }
    }
}

/// Render one task line with id, checkbox, text, and due badge.
fn render_task(task: &Task, now: DateTime<Utc>) -> String {
    let check = if task.completed { "x" } else { " " };
    let mut line = format!("  [{check}] {}  {}", task.id, task.text);

    if let Some(due) = task.due_at {
        if !task.completed {
            line.push_str(&format!("  ({})", format_remaining(due - now)));
        }
    }

    line
}
