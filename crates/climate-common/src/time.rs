//! Date handling for daily climate observations.
//!
//! Observations are keyed by calendar day and stored as `YYYY-MM-DD`
//! strings, so every bound handed to the database is rendered in exactly
//! that format to keep lexical and chronological ordering identical.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ClimateError, ClimateResult};

/// Storage and wire format for observation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the lookback window used by the "previous year" routes.
pub const LOOKBACK_DAYS: i64 = 365;

/// A calendar day on which observations were recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservationDate(NaiveDate);

impl ObservationDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a strict `YYYY-MM-DD` date.
    ///
    /// Unpadded forms such as `2016-8-1` are rejected: they would compare
    /// incorrectly against the zero-padded strings in the database.
    pub fn parse(s: &str) -> Result<Self, TimeParseError> {
        let trimmed = s.trim();
        if trimmed.len() != 10 {
            return Err(TimeParseError::InvalidFormat(s.to_string()));
        }

        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| TimeParseError::InvalidFormat(s.to_string()))
    }

    /// Render in storage format.
    pub fn to_db_string(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for ObservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ObservationDate {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Exclusive cutoff of the one-year window ending at `date`.
///
/// Always a fixed 365 days, leap years included.
pub fn one_year_before(date: ObservationDate) -> ObservationDate {
    ObservationDate(
        date.0
            .checked_sub_signed(Duration::days(LOOKBACK_DAYS))
            .unwrap_or(NaiveDate::MIN),
    )
}

/// An inclusive date range, open-ended when `end` is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: ObservationDate,
    pub end: Option<ObservationDate>,
}

impl DateRange {
    pub fn new(start: ObservationDate, end: Option<ObservationDate>) -> ClimateResult<Self> {
        if let Some(end) = end {
            if start > end {
                return Err(ClimateError::InvalidRange(format!(
                    "start date {} is after end date {}",
                    start, end
                )));
            }
        }
        Ok(Self { start, end })
    }

    /// Range covering `start` onwards.
    pub fn since(start: ObservationDate) -> Self {
        Self { start, end: None }
    }

    /// Parse path segments into a validated range.
    pub fn parse(start: &str, end: Option<&str>) -> ClimateResult<Self> {
        let start = ObservationDate::parse(start)?;
        let end = end.map(ObservationDate::parse).transpose()?;
        Self::new(start, end)
    }

    pub fn contains(&self, date: &ObservationDate) -> bool {
        date >= &self.start && self.end.map_or(true, |end| date <= &end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("expected YYYY-MM-DD, got '{0}'")]
    InvalidFormat(String),
}
