//! Normalizing categorized entries and driving a [`Formatter`].

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::Duration;
use tracing::debug;

use crate::error::ReportError;
use crate::format::Formatter;
use crate::lookahead::lookahead;
use crate::model::{CategorizedEntries, CategoryKey, CategoryReport, NO_CATEGORY, Totals};

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Merges provider output into sorted, render-ready categories.
///
/// The uncategorized bucket (a missing label or one reading "No category")
/// appears once, after all named categories. Entries within a category are
/// sorted by description, then duration. A category with entries but no
/// total is an error.
pub fn normalize(
    entries: &CategorizedEntries,
    totals: &Totals,
) -> Result<Vec<CategoryReport>, ReportError> {
    let mut merged: BTreeMap<CategoryKey, CategoryReport> = BTreeMap::new();

    for (category, items) in entries {
        let Some(total) = totals.get(category) else {
            return Err(ReportError::MissingTotal {
                category: category.as_deref().unwrap_or(NO_CATEGORY).to_string(),
            });
        };

        let key = CategoryKey::from_category(category.as_deref());
        let report = merged
            .entry(key.clone())
            .or_insert_with(|| CategoryReport {
                key,
                entries: Vec::new(),
                total: Duration::zero(),
            });
        report.entries.extend(
            items
                .iter()
                .map(|entry| (entry.description.clone(), entry.duration)),
        );
        report.total = report.total + *total;
    }

    let mut reports: Vec<_> = merged.into_values().collect();
    for report in &mut reports {
        report.entries.sort();
    }
    Ok(reports)
}

/// Renders categorized entries through `formatter`.
///
/// Nothing is written when `entries` is empty. Zero-duration arrival entries
/// are dropped before the last-entry flag is computed, so the last line
/// written for a category always gets `has_more == false`.
pub fn render(
    out: &mut dyn Write,
    entries: &CategorizedEntries,
    totals: &Totals,
    formatter: &dyn Formatter,
) -> Result<(), ReportError> {
    if entries.is_empty() {
        debug!("no entries to render");
        return Ok(());
    }

    for category in normalize(entries, totals)? {
        render_category(out, &category, formatter)?;
    }
    Ok(())
}

fn render_category(
    out: &mut dyn Write,
    category: &CategoryReport,
    formatter: &dyn Formatter,
) -> Result<(), ReportError> {
    let label = category.key.label();
    if !formatter.format_category(out, label)? {
        debug!(category = label, "category skipped by formatter");
        return Ok(());
    }

    let mut rendered = 0usize;
    for ((description, duration), has_more) in lookahead(category.work_items()) {
        formatter.format_entry(out, &capitalize(description), *duration, has_more)?;
        rendered += 1;
    }
    debug!(
        category = label,
        rendered,
        arrivals = category.entries.len() - rendered,
        "rendered category"
    );

    formatter.format_cat_separator(out, category.total)?;
    Ok(())
}
