//! The date range a report covers.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ReportError;

/// An inclusive range of calendar days.
///
/// As a time interval it is half-open: from midnight of the first day up to,
/// but excluding, midnight after the last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl ReportWindow {
    /// Creates a window, rejecting one that starts after it ends.
    pub fn new(first_day: NaiveDate, last_day: NaiveDate) -> Result<Self, ReportError> {
        if first_day > last_day {
            return Err(ReportError::InvalidWindow {
                first_day,
                last_day,
            });
        }
        Ok(Self {
            first_day,
            last_day,
        })
    }

    /// Monday through Friday of the week containing `today`.
    pub fn current_week(today: NaiveDate) -> Self {
        let days_since_monday = today.weekday().num_days_from_monday();
        let monday = today - Duration::days(i64::from(days_since_monday));
        Self {
            first_day: monday,
            last_day: monday + Duration::days(4),
        }
    }

    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// First instant inside the window.
    pub fn start(&self) -> NaiveDateTime {
        self.first_day.and_time(NaiveTime::MIN)
    }

    /// First instant after the window.
    pub fn end(&self) -> NaiveDateTime {
        (self.last_day + Duration::days(1)).and_time(NaiveTime::MIN)
    }
}
