//! Output styles for the report.
//!
//! The aggregator drives every style the same way: one
//! [`Formatter::format_category`] call per category, one
//! [`Formatter::format_entry`] call per rendered entry and a closing
//! [`Formatter::format_cat_separator`]. Styles only differ in presentation
//! and in which categories they admit.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::duration::{as_minutes, format_duration_short};

/// Width of the short duration column. Longer values like "12h30m" overflow it.
const SHORT_WIDTH: usize = 5;

/// Renders the pieces of a report.
pub trait Formatter {
    /// Writes the header for `label`. Returns `false` to skip the category.
    fn format_category(&self, out: &mut dyn Write, label: &str) -> Result<bool, fmt::Error>;

    /// Writes one entry. `has_more` is false for the last entry of a category.
    fn format_entry(
        &self,
        out: &mut dyn Write,
        description: &str,
        duration: Duration,
        has_more: bool,
    ) -> fmt::Result;

    /// Closes a category, given its total.
    fn format_cat_separator(&self, out: &mut dyn Write, total: Duration) -> fmt::Result;
}

/// Glyphs and column widths for [`PrettyFormatter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrettyStyle {
    /// Connector for an entry followed by more entries.
    pub branch: String,
    /// Connector for the last entry in a category.
    pub branch_last: String,
    /// Descriptions are padded or truncated to this many characters.
    pub description_width: usize,
    /// Length of the rule closing each category.
    pub rule_width: usize,
}

impl Default for PrettyStyle {
    fn default() -> Self {
        Self {
            branch: "├──".to_string(),
            branch_last: "└──".to_string(),
            description_width: 62,
            rule_width: 75,
        }
    }
}

/// Tree-shaped terminal output with optional time columns.
#[derive(Debug, Clone, Default)]
pub struct PrettyFormatter {
    show_time: bool,
    show_minutes: bool,
    style: PrettyStyle,
}

impl PrettyFormatter {
    pub const fn new(show_time: bool, show_minutes: bool, style: PrettyStyle) -> Self {
        Self {
            show_time,
            show_minutes,
            style,
        }
    }

    /// Column where the short duration ends, so totals line up under entries.
    fn duration_column(&self) -> usize {
        self.style.branch.chars().count() + 1 + self.style.description_width + SHORT_WIDTH
    }
}

/// Pads or truncates `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:<width$}")
}

impl Formatter for PrettyFormatter {
    fn format_category(&self, out: &mut dyn Write, label: &str) -> Result<bool, fmt::Error> {
        writeln!(out, "{}:", label.trim())?;
        Ok(true)
    }

    fn format_entry(
        &self,
        out: &mut dyn Write,
        description: &str,
        duration: Duration,
        has_more: bool,
    ) -> fmt::Result {
        let connector = if has_more {
            &self.style.branch
        } else {
            &self.style.branch_last
        };

        if !self.show_time {
            return writeln!(out, "{connector} {description}");
        }

        let description = fit(description, self.style.description_width);
        let short = format_duration_short(duration);
        if self.show_minutes {
            writeln!(
                out,
                "{connector} {description}{short:>SHORT_WIDTH$} {:>4}",
                as_minutes(duration)
            )
        } else {
            writeln!(out, "{connector} {description}{short:>SHORT_WIDTH$}")
        }
    }

    fn format_cat_separator(&self, out: &mut dyn Write, total: Duration) -> fmt::Result {
        if !self.show_time {
            return writeln!(out);
        }

        writeln!(out, "{}", "-".repeat(self.style.rule_width))?;
        let short = format_duration_short(total);
        let column = self.duration_column();
        if self.show_minutes {
            writeln!(out, "{short:>column$} {:>4}", as_minutes(total))
        } else {
            writeln!(out, "{short:>column$}")
        }
    }
}

/// Default mapping from category labels to email section headers.
pub fn default_email_sections() -> BTreeMap<String, String> {
    [
        ("Development", "# Development"),
        ("Meetings", "# Meetings"),
        ("Reviews", "# Reviews"),
        ("Support", "# Cases"),
    ]
    .into_iter()
    .map(|(label, header)| (label.to_string(), header.to_string()))
    .collect()
}

/// Plain output for pasting into a status email.
///
/// Only categories listed in the section mapping are rendered.
#[derive(Debug, Clone)]
pub struct EmailFormatter {
    sections: BTreeMap<String, String>,
}

impl EmailFormatter {
    pub const fn new(sections: BTreeMap<String, String>) -> Self {
        Self { sections }
    }

    /// Header for `label`, if the category belongs in the email.
    pub fn section(&self, label: &str) -> Option<&str> {
        self.sections.get(label.trim()).map(String::as_str)
    }
}

impl Default for EmailFormatter {
    fn default() -> Self {
        Self::new(default_email_sections())
    }
}

impl Formatter for EmailFormatter {
    fn format_category(&self, out: &mut dyn Write, label: &str) -> Result<bool, fmt::Error> {
        let Some(header) = self.section(label) else {
            return Ok(false);
        };
        writeln!(out, "{header}")?;
        Ok(true)
    }

    fn format_entry(
        &self,
        out: &mut dyn Write,
        description: &str,
        _duration: Duration,
        _has_more: bool,
    ) -> fmt::Result {
        writeln!(out, "{description}")
    }

    fn format_cat_separator(&self, out: &mut dyn Write, _total: Duration) -> fmt::Result {
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pretty(show_time: bool, show_minutes: bool) -> PrettyFormatter {
        PrettyFormatter::new(show_time, show_minutes, PrettyStyle::default())
    }

    #[test]
    fn test_pretty_category_trims_label() {
        let mut out = String::new();
        assert!(pretty(true, false).format_category(&mut out, " Meetings ").unwrap());
        assert_eq!(out, "Meetings:\n");
    }

    #[test]
    fn test_pretty_entry_with_time() {
        let mut out = String::new();
        pretty(true, false)
            .format_entry(&mut out, "Standup", Duration::minutes(30), true)
            .unwrap();
        assert_eq!(out, format!("├── {:<62}  30m\n", "Standup"));
    }

    #[test]
    fn test_pretty_entry_with_minutes() {
        let mut out = String::new();
        pretty(true, true)
            .format_entry(&mut out, "Deploy", Duration::minutes(150), false)
            .unwrap();
        assert_eq!(out, format!("└── {:<62}2h30m  150\n", "Deploy"));
    }

    #[test]
    fn test_pretty_entry_without_time() {
        let mut out = String::new();
        let formatter = pretty(false, true);
        formatter
            .format_entry(&mut out, "Standup", Duration::minutes(30), true)
            .unwrap();
        formatter
            .format_entry(&mut out, "Retro", Duration::minutes(60), false)
            .unwrap();
        assert_eq!(out, "├── Standup\n└── Retro\n");
    }

    #[test]
    fn test_pretty_truncates_long_description() {
        let mut out = String::new();
        let long = "x".repeat(80);
        pretty(true, false)
            .format_entry(&mut out, &long, Duration::minutes(5), false)
            .unwrap();
        assert_eq!(out, format!("└── {}   5m\n", "x".repeat(62)));
    }

    #[test]
    fn test_pretty_separator_aligns_total() {
        let mut out = String::new();
        pretty(true, true)
            .format_cat_separator(&mut out, Duration::minutes(90))
            .unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "-".repeat(75));
        assert_eq!(lines[1], format!("{:>71}   90", "1h30m"));
    }

    #[test]
    fn test_pretty_separator_without_time_is_blank() {
        let mut out = String::new();
        pretty(false, false)
            .format_cat_separator(&mut out, Duration::minutes(90))
            .unwrap();
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_pretty_custom_glyphs() {
        let style = PrettyStyle {
            branch: "|-".to_string(),
            branch_last: "`-".to_string(),
            description_width: 10,
            rule_width: 20,
        };
        let formatter = PrettyFormatter::new(true, false, style);
        let mut out = String::new();
        formatter
            .format_entry(&mut out, "Coding", Duration::minutes(45), false)
            .unwrap();
        formatter
            .format_cat_separator(&mut out, Duration::minutes(45))
            .unwrap();
        assert_eq!(
            out,
            format!("`- Coding      45m\n{}\n{:>18}\n", "-".repeat(20), "45m")
        );
    }

    #[test]
    fn test_email_accepts_whitelisted_category() {
        let mut out = String::new();
        let accepted = EmailFormatter::default()
            .format_category(&mut out, "Support ")
            .unwrap();
        assert!(accepted);
        assert_eq!(out, "# Cases\n");
    }

    #[test]
    fn test_email_rejects_unknown_category_silently() {
        let mut out = String::new();
        let accepted = EmailFormatter::default()
            .format_category(&mut out, "No category")
            .unwrap();
        assert!(!accepted);
        assert!(out.is_empty());
    }

    #[test]
    fn test_email_entry_is_bare_description() {
        let mut out = String::new();
        let formatter = EmailFormatter::default();
        formatter
            .format_entry(&mut out, "Fix login", Duration::minutes(30), true)
            .unwrap();
        formatter
            .format_cat_separator(&mut out, Duration::minutes(30))
            .unwrap();
        assert_eq!(out, "Fix login\n\n");
    }
}
