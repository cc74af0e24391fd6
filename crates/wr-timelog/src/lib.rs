//! Reader for gtimelog `timelog.txt` files.
//!
//! Provides a [`TimeWindow`] over the log, implementing
//! [`wr_core::TimeWindowProvider`].
//!
//! # Log Format
//!
//! Each line records the moment a task was *finished*:
//!
//! ```text
//! 2025-01-27 09:00: arrived
//! 2025-01-27 09:30: Meetings: standup
//! 2025-01-27 12:00: Development: parser refactor
//! 2025-01-27 13:00: lunch **
//! ```
//!
//! - Timestamps are `YYYY-MM-DD HH:MM`, optionally with seconds and a UTC
//!   offset (the offset is ignored; times are local wall-clock times).
//! - A task's duration is the time since the previous line on the same
//!   virtual day. The first line of a day has zero duration (an arrival).
//! - Text before the first `": "` is the category.
//! - Lines containing `**` are slacking and don't count as work.
//! - Blank lines, `#` comments and unparseable lines are skipped.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use thiserror::Error;
use tracing::debug;
use wr_core::{CategorizedEntries, Entry, TimeWindowProvider, Totals};

/// Pre-compiled regex for a log line: timestamp, optional offset, text.
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}(?::\d{2})?)(?: [+-]\d{4})?: (.*)$").unwrap()
});

/// Marker for non-work entries.
const SLACKING_MARKER: &str = "**";

/// Separator between category and description.
const CATEGORY_SEPARATOR: &str = ": ";

/// Log reading errors.
#[derive(Debug, Error)]
pub enum TimelogError {
    /// The log file could not be read.
    #[error("failed to read time log {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single timestamped line from the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogItem {
    pub timestamp: NaiveDateTime,
    pub text: String,
}

/// A log line with the interval it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowEntry<'a> {
    pub start: NaiveDateTime,
    pub stop: NaiveDateTime,
    pub duration: Duration,
    pub text: &'a str,
}

impl WindowEntry<'_> {
    /// Whether this entry counts as slacking rather than work.
    pub fn is_slacking(&self) -> bool {
        self.text.contains(SLACKING_MARKER)
    }
}

/// Parses one log line, returning `None` for anything that isn't an entry.
pub fn parse_line(line: &str) -> Option<LogItem> {
    let caps = LINE_RE.captures(line.trim_end())?;
    let raw = &caps[1];
    let timestamp = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M"))
        .ok()?;
    Some(LogItem {
        timestamp,
        text: caps[2].to_string(),
    })
}

/// The logical day `timestamp` belongs to, given where a day begins.
pub fn virtual_day(timestamp: NaiveDateTime, virtual_midnight: NaiveTime) -> NaiveDate {
    let date = timestamp.date();
    if timestamp.time() < virtual_midnight {
        date.pred_opt().unwrap_or(date)
    } else {
        date
    }
}

/// Log entries within `[start, end)`.
#[derive(Debug, Clone)]
pub struct TimeWindow {
    virtual_midnight: NaiveTime,
    items: Vec<LogItem>,
}

impl TimeWindow {
    /// Reads the log at `path`, keeping entries within `[start, end)`.
    pub fn load(
        path: &Path,
        start: NaiveDateTime,
        end: NaiveDateTime,
        virtual_midnight: NaiveTime,
    ) -> Result<Self, TimelogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TimelogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let window = Self::parse(&contents, start, end, virtual_midnight);
        debug!(
            path = %path.display(),
            items = window.items.len(),
            "loaded time log"
        );
        Ok(window)
    }

    /// Builds a window from log text.
    pub fn parse(
        contents: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        virtual_midnight: NaiveTime,
    ) -> Self {
        let mut items = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some(item) = parse_line(line) else {
                debug!(line = index + 1, "skipping unparseable log line");
                continue;
            };
            if item.timestamp >= start && item.timestamp < end {
                items.push(item);
            }
        }
        // Stable sort keeps the file order for identical timestamps.
        items.sort_by_key(|item| item.timestamp);

        Self {
            virtual_midnight,
            items,
        }
    }

    pub fn items(&self) -> &[LogItem] {
        &self.items
    }

    /// Every entry with its interval. An entry that starts a new virtual day
    /// has zero duration.
    pub fn all_entries(&self) -> impl Iterator<Item = WindowEntry<'_>> {
        let virtual_midnight = self.virtual_midnight;
        let mut previous: Option<NaiveDateTime> = None;
        self.items.iter().map(move |item| {
            let stop = item.timestamp;
            let start = match previous {
                Some(prev)
                    if virtual_day(prev, virtual_midnight) == virtual_day(stop, virtual_midnight) =>
                {
                    prev
                }
                _ => stop,
            };
            previous = Some(stop);
            WindowEntry {
                start,
                stop,
                duration: stop - start,
                text: &item.text,
            }
        })
    }
}

impl TimeWindowProvider for TimeWindow {
    fn totals(&self) -> (Duration, Duration) {
        self.all_entries()
            .fold((Duration::zero(), Duration::zero()), |(work, slacking), entry| {
                if entry.is_slacking() {
                    (work, slacking + entry.duration)
                } else {
                    (work + entry.duration, slacking)
                }
            })
    }

    fn categorized_work_entries(&self) -> (CategorizedEntries, Totals) {
        let mut entries = CategorizedEntries::new();
        let mut totals = Totals::new();

        // The very first line only marks the start of tracking.
        for entry in self.all_entries().skip(1).filter(|e| !e.is_slacking()) {
            let (category, description) = match entry.text.split_once(CATEGORY_SEPARATOR) {
                Some((category, description)) => (Some(category.to_string()), description),
                None => (None, entry.text),
            };
            entries
                .entry(category.clone())
                .or_default()
                .push(Entry::new(entry.start, description, entry.duration));
            let total = totals.entry(category).or_insert_with(Duration::zero);
            *total = *total + entry.duration;
        }

        (entries, totals)
    }
}
