//! Errors raised while building a report.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that abort report generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The report window starts after it ends.
    #[error("report window starts on {first_day}, which is after its last day {last_day}")]
    InvalidWindow {
        first_day: NaiveDate,
        last_day: NaiveDate,
    },

    /// The log provider returned entries for a category without a total.
    #[error("category {category:?} has entries but no total")]
    MissingTotal { category: String },

    /// Writing to the output sink failed.
    #[error("failed to write report output")]
    Format(#[from] fmt::Error),
}
