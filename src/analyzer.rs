use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info, info_span, warn, Dispatch};

use crate::date::TargetDate;
use crate::error::{Error, Result};
use crate::logging;
use crate::record::{LogRow, RowOutcome, COOKIE_COLUMN, TIMESTAMP_COLUMN};
use crate::stats::{Analysis, FrequencyTable, SkippedRow};

/// Finds the most active cookie(s) of a day in a `cookie,timestamp` log.
///
/// All diagnostics go through the analyzer's own [`Dispatch`], so two
/// analyzers in one process can log to different places.
pub struct CookieAnalyzer {
    dispatch: Dispatch,
}

impl Default for CookieAnalyzer {
    fn default() -> Self {
        Self::with_dispatch(logging::stderr_dispatch(false))
    }
}

impl CookieAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dispatch(dispatch: Dispatch) -> Self {
        CookieAnalyzer { dispatch }
    }

    /// Validates `date` as `YYYY-MM-DD`, then scans the file at `path`.
    ///
    /// The date is checked before the file is touched, so a bad date is
    /// reported as [`Error::InvalidArgument`] even when the path is also bad.
    pub fn analyze(&self, path: impl AsRef<Path>, date: &str) -> Result<Analysis> {
        let target = tracing::dispatcher::with_default(&self.dispatch, || {
            date.parse::<TargetDate>().map_err(|e| {
                error!(action = "validate", component = "target_date", date = date, error = %e, "Invalid date format");
                e
            })
        })?;
        self.analyze_date(path, target)
    }

    pub fn analyze_date(&self, path: impl AsRef<Path>, target: TargetDate) -> Result<Analysis> {
        let path = path.as_ref();
        tracing::dispatcher::with_default(&self.dispatch, || {
            let _span = info_span!("analyze", file = ?path, date = %target).entered();
            let file = File::open(path).map_err(|source| {
                error!(action = "open", component = "cookie_log", file = ?path, error = %source, "Invalid file path");
                Error::NotFound {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            info!(action = "open", component = "cookie_log", file = ?path, "Opened cookie log");
            Ok(scan(file, target))
        })
    }

    /// Scans an already-open log. I/O trouble mid-stream interrupts the scan
    /// rather than failing it, so this never errors.
    pub fn analyze_reader<R: io::Read>(&self, reader: R, target: TargetDate) -> Analysis {
        tracing::dispatcher::with_default(&self.dispatch, || scan(reader, target))
    }
}

/// One-shot helper returning only the most active cookies.
pub fn most_active_cookies(path: impl AsRef<Path>, date: &str) -> Result<Vec<String>> {
    CookieAnalyzer::new()
        .analyze(path, date)
        .map(Analysis::into_cookies)
}

#[derive(Default)]
struct Tally {
    table: FrequencyTable,
    skipped: Vec<SkippedRow>,
    rows_scanned: u64,
    rows_matched: u64,
}

fn scan<R: io::Read>(source: R, target: TargetDate) -> Analysis {
    let start_time = Instant::now();
    info!(action = "start", component = "row_scan", date = %target, "Scanning cookie log");

    // extra trailing fields are ignored; only the named columns are read
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);
    let mut tally = Tally::default();

    let interrupted = match scan_rows(&mut reader, &target, &mut tally) {
        Ok(()) => None,
        Err(message) => {
            error!(
                action = "abort",
                component = "row_scan",
                rows_scanned = tally.rows_scanned,
                error = %message,
                "Stopped reading cookie log"
            );
            Some(message)
        }
    };

    // a partial tally is not an answer
    let (most_active, max_count) = match interrupted {
        Some(_) => (Vec::new(), 0),
        None => (tally.table.most_frequent(), tally.table.max_count()),
    };
    info!(
        action = "complete",
        component = "row_scan",
        rows_scanned = tally.rows_scanned,
        rows_matched = tally.rows_matched,
        rows_skipped = tally.skipped.len(),
        distinct_cookies = tally.table.len(),
        max_count,
        duration_ms = start_time.elapsed().as_millis(),
        "Cookie log scan completed"
    );

    Analysis {
        target_date: target,
        most_active,
        max_count,
        rows_scanned: tally.rows_scanned,
        rows_matched: tally.rows_matched,
        skipped: tally.skipped,
        interrupted,
    }
}

fn scan_rows<R: io::Read>(
    reader: &mut csv::Reader<R>,
    target: &TargetDate,
    tally: &mut Tally,
) -> std::result::Result<(), String> {
    let headers = reader.headers().map_err(|e| e.to_string())?.clone();
    if headers.is_empty() {
        warn!(action = "read", component = "cookie_log", "Cookie log is empty");
        return Ok(());
    }
    for column in [COOKIE_COLUMN, TIMESTAMP_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(format!(
                "header {:?} has no '{}' column",
                headers.iter().collect::<Vec<_>>(),
                column
            ));
        }
    }

    let mut record = csv::StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(e) => return Err(e.to_string()),
        }
        tally.rows_scanned += 1;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: LogRow = record
            .deserialize(Some(&headers))
            .map_err(|e| e.to_string())?;

        match row.classify(target) {
            RowOutcome::Matched(cookie) => {
                tally.rows_matched += 1;
                tally.table.record(cookie);
            }
            RowOutcome::OtherDay => {}
            RowOutcome::Skipped(reason) => {
                warn!(
                    action = "skip",
                    component = "row_scan",
                    line,
                    cookie = %row.cookie,
                    timestamp = %row.timestamp,
                    reason = %reason,
                    "Invalid date format in row"
                );
                tally.skipped.push(SkippedRow {
                    line,
                    timestamp: row.timestamp,
                    reason,
                });
            }
        }
    }
}
