use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

// chrono accepts "2018-12-9" and "+2018-12-09" for %Y-%m-%d, so the shape is checked first
fn date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles")
    })
}

/// Why a string could not be read as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// Not of the form `YYYY-MM-DD`.
    Shape,
    /// Right shape, but no such day (e.g. `2018-02-30`).
    Calendar(chrono::ParseError),
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParseError::Shape => write!(f, "expected YYYY-MM-DD"),
            DateParseError::Calendar(err) => write!(f, "not a calendar date ({})", err),
        }
    }
}

impl std::error::Error for DateParseError {}

/// Parses a strict `YYYY-MM-DD` string.
pub fn parse_calendar_date(s: &str) -> Result<NaiveDate, DateParseError> {
    if !date_shape().is_match(s) {
        return Err(DateParseError::Shape);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(DateParseError::Calendar)
}

/// The date part of an ISO-8601 date-time, i.e. everything before the `T`
/// (or space) separator. Time of day and offset are left unvalidated.
pub fn date_portion(timestamp: &str) -> &str {
    match timestamp.find(['T', ' ']) {
        Some(idx) => &timestamp[..idx],
        None => timestamp,
    }
}

/// Reads the calendar date out of a log timestamp.
pub fn timestamp_date(timestamp: &str) -> Result<NaiveDate, DateParseError> {
    parse_calendar_date(date_portion(timestamp.trim()))
}

/// The day an analysis is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetDate(NaiveDate);

impl TargetDate {
    pub fn new(date: NaiveDate) -> Self {
        TargetDate(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        self.0 == date
    }
}

impl FromStr for TargetDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_calendar_date(s)
            .map(TargetDate)
            .map_err(|e| Error::InvalidArgument {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl From<NaiveDate> for TargetDate {
    fn from(date: NaiveDate) -> Self {
        TargetDate(date)
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
