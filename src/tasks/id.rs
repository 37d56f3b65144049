//! Task ID generation.
//!
//! Ids are the creation instant's millisecond timestamp, with a monotonic
//! floor: if two tasks are created within the same millisecond, the second
//! gets the previous id plus one. Ids therefore stay unique and strictly
//! increasing without changing the external contract (an opaque integer
//! derived from creation time).

use crate::tasks::models::TaskId;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

/// The last id handed out, used as the monotonic floor.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Counter for deterministic ID generation in tests.
static TEST_COUNTER: AtomicI64 = AtomicI64::new(0);

/// Whether to use deterministic IDs (for testing).
static USE_DETERMINISTIC_IDS: AtomicBool = AtomicBool::new(false);

/// Enable deterministic ID generation for testing.
///
/// When enabled, ids count up from 1 instead of using the wall clock.
pub fn enable_deterministic_ids() {
    USE_DETERMINISTIC_IDS.store(true, Ordering::SeqCst);
    TEST_COUNTER.store(0, Ordering::SeqCst);
}

/// Disable deterministic ID generation.
pub fn disable_deterministic_ids() {
    USE_DETERMINISTIC_IDS.store(false, Ordering::SeqCst);
}

/// Generate a fresh task id.
///
/// Returns the current wall-clock millisecond timestamp, bumped past the
/// previously issued id when the clock has not advanced (or has gone
/// backwards), so ids are unique even under rapid successive creation.
#[must_use]
pub fn next_task_id() -> TaskId {
    if USE_DETERMINISTIC_IDS.load(Ordering::SeqCst) {
        return TEST_COUNTER.fetch_add(1, Ordering::SeqCst) + 1;
    }

    let now_ms = chrono::Utc::now().timestamp_millis();
    LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(now_ms.max(last + 1)))
        .map_or(now_ms, |last| now_ms.max(last + 1))
}
