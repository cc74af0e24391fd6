//! Report data model.

use std::collections::HashMap;
use std::fmt;

use chrono::{Duration, NaiveDateTime};

/// Label used for entries logged without a category.
pub const NO_CATEGORY: &str = "No category";

/// A single piece of logged work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// When the work started.
    pub start: NaiveDateTime,
    /// Free-text description, without its category prefix.
    pub description: String,
    /// Time spent. Zero marks an arrival.
    pub duration: Duration,
}

impl Entry {
    pub fn new(start: NaiveDateTime, description: impl Into<String>, duration: Duration) -> Self {
        Self {
            start,
            description: description.into(),
            duration,
        }
    }
}

/// A category as produced by a log provider; `None` means uncategorized.
pub type Category = Option<String>;

/// Entries grouped by category.
pub type CategorizedEntries = HashMap<Category, Vec<Entry>>;

/// Time spent per category.
pub type Totals = HashMap<Category, Duration>;

/// Normalized category key.
///
/// Named categories order by their raw label; the uncategorized bucket
/// always sorts last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKey {
    Named(String),
    Uncategorized,
}

impl CategoryKey {
    /// Maps a provider category to its key. A missing label and a label
    /// reading "No category" land in the same bucket.
    pub fn from_category(category: Option<&str>) -> Self {
        match category {
            Some(label) if label.trim() != NO_CATEGORY => Self::Named(label.to_string()),
            _ => Self::Uncategorized,
        }
    }

    /// The label passed to formatters.
    pub fn label(&self) -> &str {
        match self {
            Self::Named(label) => label,
            Self::Uncategorized => NO_CATEGORY,
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A category ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub key: CategoryKey,
    /// `(description, duration)` pairs sorted by description, then duration.
    pub entries: Vec<(String, Duration)>,
    pub total: Duration,
}

impl CategoryReport {
    /// Entries that produce an output line, in render order.
    pub fn work_items(&self) -> impl Iterator<Item = &(String, Duration)> {
        self.entries
            .iter()
            .filter(|(_, duration)| *duration > Duration::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncategorized_sorts_after_named() {
        let mut keys = vec![
            CategoryKey::Uncategorized,
            CategoryKey::Named("zzz".into()),
            CategoryKey::Named("Admin".into()),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                CategoryKey::Named("Admin".into()),
                CategoryKey::Named("zzz".into()),
                CategoryKey::Uncategorized,
            ]
        );
    }

    #[test]
    fn test_named_sentinel_is_uncategorized() {
        assert_eq!(
            CategoryKey::from_category(Some("No category")),
            CategoryKey::Uncategorized
        );
        assert_eq!(
            CategoryKey::from_category(Some("No category ")),
            CategoryKey::Uncategorized
        );
        assert_eq!(CategoryKey::from_category(None), CategoryKey::Uncategorized);
    }

    #[test]
    fn test_named_key_keeps_raw_label() {
        let key = CategoryKey::from_category(Some("Meetings "));
        assert_eq!(key.label(), "Meetings ");
        assert_eq!(CategoryKey::Uncategorized.to_string(), "No category");
    }
}
