use serde::{Deserialize, Serialize};
use std::fmt;

use crate::date::{timestamp_date, DateParseError, TargetDate};

/// Column names every cookie log header must carry.
pub const COOKIE_COLUMN: &str = "cookie";
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// One `cookie,timestamp` line of a cookie log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogRow {
    pub cookie: String,
    pub timestamp: String,
}

/// Why a row was left out of the tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The timestamp's date part could not be parsed.
    InvalidTimestamp(DateParseError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidTimestamp(err) => write!(f, "invalid timestamp: {}", err),
        }
    }
}

/// What a single row contributes to an analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Logged on the target date; the cookie should be counted.
    Matched(String),
    /// Valid, but logged on another day.
    OtherDay,
    /// Unreadable; skipped with a warning.
    Skipped(SkipReason),
}

impl LogRow {
    pub fn new(cookie: impl Into<String>, timestamp: impl Into<String>) -> Self {
        LogRow {
            cookie: cookie.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn classify(&self, target: &TargetDate) -> RowOutcome {
        match timestamp_date(&self.timestamp) {
            Ok(date) if target.matches(date) => RowOutcome::Matched(self.cookie.clone()),
            Ok(_) => RowOutcome::OtherDay,
            Err(err) => RowOutcome::Skipped(SkipReason::InvalidTimestamp(err)),
        }
    }
}
