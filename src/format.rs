//! Human-readable remaining-time formatting for due badges.

use chrono::Duration;

/// Format the time remaining until a due instant as a short badge string.
///
/// Picks the largest whole unit: `"3d left"`, `"2h left"`, `"5m left"`,
/// `"12s left"`. Zero or negative durations are `"Overdue"`.
#[must_use]
pub fn format_remaining(remaining: Duration) -> String {
    let total_seconds = remaining.num_seconds();
    if total_seconds <= 0 {
        return "Overdue".to_string();
    }

    let total_minutes = total_seconds / 60;
    let total_hours = total_minutes / 60;
    let total_days = total_hours / 24;

    if total_days >= 1 {
        format!("{total_days}d left")
    } else if total_hours >= 1 {
        format!("{total_hours}h left")
    } else if total_minutes >= 1 {
        format!("{total_minutes}m left")
    } else {
        format!("{total_seconds}s left")
    }
}
