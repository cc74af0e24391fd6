//! Core logic for the weekly activity report.
//!
//! This crate contains:
//! - The report data model: entries, categories and totals
//! - Aggregation: normalizing and sorting categorized entries
//! - Formatters: the pretty terminal and email output styles
//! - Report windows: the date range a report covers

mod aggregate;
pub mod duration;
mod error;
pub mod format;
mod lookahead;
pub mod model;
mod provider;
mod window;

pub use aggregate::{capitalize, normalize, render};
pub use error::ReportError;
pub use format::{EmailFormatter, Formatter, PrettyFormatter, PrettyStyle};
pub use lookahead::{Lookahead, lookahead};
pub use model::{CategorizedEntries, Category, CategoryKey, CategoryReport, Entry, NO_CATEGORY, Totals};
pub use provider::TimeWindowProvider;
pub use window::ReportWindow;
