//! Duration formatting for report columns.

use chrono::Duration;

/// Whole minutes in `duration`, rounded down.
/// Negative durations are treated as zero.
pub fn as_minutes(duration: Duration) -> i64 {
    duration.num_minutes().max(0)
}

/// Formats a duration compactly: "45m", "2h30m", "1h05m".
pub fn format_duration_short(duration: Duration) -> String {
    let total_minutes = as_minutes(duration);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours >= 1 {
        format!("{hours}h{minutes:02}m")
    } else {
        format!("{minutes}m")
    }
}
