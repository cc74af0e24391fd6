//! Report command: resolves the window, reads the log, renders the report.

use std::fmt::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_english::{Dialect, parse_date_string};
use clap::CommandFactory;
use clap::error::ErrorKind;
use wr_core::duration::format_duration_short;
use wr_core::{
    EmailFormatter, Formatter, PrettyFormatter, ReportError, ReportWindow, TimeWindowProvider,
    render,
};
use wr_timelog::TimeWindow;

use crate::{Cli, Config};

/// Output style selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    Pretty { show_time: bool, show_minutes: bool },
    Email,
}

impl ReportStyle {
    /// Email wins over the pretty-output toggles.
    pub const fn from_flags(no_time: bool, minutes: bool, email: bool) -> Self {
        if email {
            Self::Email
        } else {
            Self::Pretty {
                show_time: !no_time,
                show_minutes: minutes,
            }
        }
    }

    pub fn formatter(self, config: &Config) -> Box<dyn Formatter> {
        match self {
            Self::Pretty {
                show_time,
                show_minutes,
            } => Box::new(PrettyFormatter::new(
                show_time,
                show_minutes,
                config.pretty.clone(),
            )),
            Self::Email => Box::new(EmailFormatter::new(config.email_sections.clone())),
        }
    }
}

// ========== Window Resolution ==========

/// Parses a date such as "2025-01-27", "27/01/2025" or "last monday".
pub fn parse_day<Tz>(input: &str, now: &DateTime<Tz>) -> Result<NaiveDate>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    parse_date_string(input, now.clone(), Dialect::Uk)
        .map(|parsed| parsed.date_naive())
        .map_err(|e| {
            Cli::command()
                .error(
                    ErrorKind::ValueValidation,
                    format!("failed to parse date {input:?}: {e}"),
                )
                .into()
        })
}

/// Resolves the report window. Defaults to Monday through Friday of the
/// current week; `from` and `to` override either end.
pub fn resolve_window<Tz>(
    from: Option<&str>,
    to: Option<&str>,
    now: &DateTime<Tz>,
) -> Result<ReportWindow>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    let week = ReportWindow::current_week(now.date_naive());
    let first_day = match from {
        Some(input) => parse_day(input, now)?,
        None => week.first_day(),
    };
    let last_day = match to {
        Some(input) => parse_day(input, now)?,
        None => week.last_day(),
    };

    ReportWindow::new(first_day, last_day)
        .map_err(|e| Cli::command().error(ErrorKind::ArgumentConflict, e).into())
}

// ========== Report Generation ==========

/// Formats the full report: header, categories, grand total.
pub fn format_report(
    log: &dyn TimeWindowProvider,
    window: &ReportWindow,
    user: &str,
    formatter: &dyn Formatter,
) -> Result<String, ReportError> {
    let mut output = String::new();

    writeln!(
        output,
        "[ACTIVITY] {} to {} ({user})",
        window.first_day(),
        window.last_day()
    )?;

    let (total_work, _) = log.totals();
    let (entries, totals) = log.categorized_work_entries();
    render(&mut output, &entries, &totals, formatter)?;

    writeln!(output, "Total work done : {}", format_duration_short(total_work))?;
    Ok(output)
}

// ========== Public Interface ==========

/// Runs the report command.
pub fn run(config: &Config, window: ReportWindow, style: ReportStyle) -> Result<()> {
    tracing::debug!(
        first_day = %window.first_day(),
        last_day = %window.last_day(),
        ?style,
        "generating report"
    );

    let log = TimeWindow::load(
        &config.log_path,
        window.start(),
        window.end(),
        config.virtual_midnight,
    )
    .context("failed to open time log")?;

    let formatter = style.formatter(config);
    let output = format_report(&log, &window, &config.user, formatter.as_ref())
        .context("failed to render report")?;
    print!("{output}");

    Ok(())
}
