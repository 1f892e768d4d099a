pub mod analyzer;
pub mod args;
pub mod date;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod record;
pub mod stats;

pub use analyzer::{most_active_cookies, CookieAnalyzer};
pub use args::{Args, GenArgs};
pub use date::TargetDate;
pub use error::{Error, Result};
pub use record::{LogRow, RowOutcome, SkipReason};
pub use stats::{Analysis, FrequencyTable, SkippedRow};
