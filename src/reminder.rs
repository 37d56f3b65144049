//! Due-date reminder engine.
//!
//! Polls the task store on a fixed interval and notifies the user once per
//! task whose due time has elapsed. A task is eligible when it has a due
//! time at or before "now" and is not completed, not archived, and not
//! already reminded. Flagged tasks are persisted once per poll cycle, not
//! once per task.

use crate::tasks::{TaskId, TaskStore};
use crate::traits::{LocalStore, Notifier};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Run one reminder poll against the store.
///
/// Notifies once for each newly overdue task, then batch-persists the
/// updated `reminded` flags. Returns the number of reminders fired; a
/// non-zero return is the "tasks changed" signal for the rendering layer.
///
/// Idempotent under repeated polling: a task that already fired is skipped.
pub fn poll<S: LocalStore, N: Notifier>(
    store: &mut TaskStore<S>,
    notifier: &mut N,
    now: DateTime<Utc>,
) -> usize {
    let due: Vec<TaskId> = store
        .tasks()
        .iter()
        .filter(|task| task.needs_reminder(now))
        .map(|task| task.id)
        .collect();

    if due.is_empty() {
        return 0;
    }

    for id in &due {
        if let Some(task) = store.get(*id) {
            notifier.notify(&format!("{} is due for completion", task.text));
        }
    }

    store.mark_reminded(&due);
    due.len()
}

/// Drive the reminder poll on a fixed interval, forever.
///
/// Single-threaded and cooperative: each tick runs one poll to completion,
/// then sleeps. `on_fired` is invoked with the fired count after any tick
/// that flagged at least one task, so the caller can refresh its display.
/// The timer is a process-lifetime resource; there is no teardown.
pub fn run<S: LocalStore, N: Notifier>(
    store: &mut TaskStore<S>,
    notifier: &mut N,
    interval: Duration,
    mut on_fired: impl FnMut(usize),
) -> ! {
    loop {
        let fired = poll(store, notifier, Utc::now());
        if fired > 0 {
            on_fired(fired);
        }
        std::thread::sleep(interval);
    }
}
