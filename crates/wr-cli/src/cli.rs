//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Weekly activity report.
///
/// Summarizes a gtimelog time log by category for the current work week,
/// or for an explicit date range.
#[derive(Debug, Parser)]
#[command(name = "weekly-report", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the time log (overrides `log_path` and `WR_LOG_PATH`).
    #[arg(short, long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// User identity shown in the header (overrides `user` and `WR_USER`).
    #[arg(short, long)]
    pub user: Option<String>,

    /// First day of the report (e.g., "2025-01-27", "last monday").
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last day of the report (e.g., "2025-01-31", "yesterday").
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Print weekly report without spent time.
    #[arg(short = 'n', long)]
    pub no_time: bool,

    /// Also print durations as whole minutes.
    #[arg(short, long)]
    pub minutes: bool,

    /// Format the report for pasting into an email.
    #[arg(short, long)]
    pub email: bool,
}
