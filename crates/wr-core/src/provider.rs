//! Contract for sources of categorized work entries.

use chrono::Duration;

use crate::model::{CategorizedEntries, Totals};

/// A log source restricted to a time window.
///
/// This trait lets the report work with different log representations
/// (e.g. a gtimelog file from wr-timelog, or test fixtures).
pub trait TimeWindowProvider {
    /// Returns `(total work, total slacking)` for the window.
    fn totals(&self) -> (Duration, Duration);

    /// Returns work entries grouped by category, with per-category totals.
    fn categorized_work_entries(&self) -> (CategorizedEntries, Totals);
}
