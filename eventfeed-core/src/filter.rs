//! Year/month filter validation and matching.
//!
//! The filter arrives as raw request path segments (`/events/2022/5`). The
//! segments are parsed into a `Period` at this single boundary; everything
//! downstream consumes only the validated form.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::event::Event;

/// Earliest year the filter accepts, inclusive.
pub const MIN_FILTER_YEAR: i32 = 2021;
/// Latest year the filter accepts, inclusive.
pub const MAX_FILTER_YEAR: i32 = 2030;

/// A validated year/month window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
}

/// Reasons a filter request fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("expected a year and a month path segment")]
    MissingSegment,

    #[error("filter segments must be base-10 integers")]
    NotNumeric,

    #[error("year {0} is outside 2021-2030")]
    YearOutOfRange(i32),

    #[error("month {0} is outside 1-12")]
    MonthOutOfRange(i32),
}

impl Period {
    /// Parse the first two path segments into a validated period.
    ///
    /// Segments past year/month are ignored rather than rejected; the
    /// navigation producer never emits more than two.
    pub fn parse(segments: &[&str]) -> Result<Self, FilterError> {
        let (year_raw, month_raw) = match segments {
            [year, month, ..] => (*year, *month),
            _ => return Err(FilterError::MissingSegment),
        };

        let year: i32 = year_raw.parse().map_err(|_| FilterError::NotNumeric)?;
        let month: i32 = month_raw.parse().map_err(|_| FilterError::NotNumeric)?;

        if !(MIN_FILTER_YEAR..=MAX_FILTER_YEAR).contains(&year) {
            return Err(FilterError::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(FilterError::MonthOutOfRange(month));
        }

        Ok(Period {
            year,
            month: month as u32,
        })
    }

    /// Exact calendar match. chrono months are already 1-based, so the
    /// user-facing month compares directly.
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Human-readable label, e.g. "May 2022".
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(date) => date.format("%B %Y").to_string(),
            // Unreachable for a parsed period; kept total anyway.
            None => format!("{}/{}", self.month, self.year),
        }
    }
}

/// Keep the events falling inside `period`, preserving input order.
pub fn filter_events(events: &[Event], period: Period) -> Vec<Event> {
    events
        .iter()
        .filter(|event| period.matches(event.date))
        .cloned()
        .collect()
}

/// Terminal outcome of one filter request.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// Validation failed; no matching was attempted.
    Invalid(FilterError),
    /// Validation passed but no event fell inside the period.
    Empty(Period),
    /// Validation passed with at least one match.
    Matches(Period, Vec<Event>),
}

/// Validate the raw segments and, if they hold up, select matching events.
pub fn apply_filter(events: &[Event], segments: &[&str]) -> FilterOutcome {
    let period = match Period::parse(segments) {
        Ok(period) => period,
        Err(err) => return FilterOutcome::Invalid(err),
    };

    let matched = filter_events(events, period);
    if matched.is_empty() {
        FilterOutcome::Empty(period)
    } else {
        FilterOutcome::Matches(period, matched)
    }
}
