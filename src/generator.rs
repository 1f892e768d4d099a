//! Synthetic cookie logs for exercising the analyzer.
//!
//! A log covers `days` consecutive days. Each day gets `per_day` entries one
//! hour apart starting at midnight UTC, and each entry names a cookie drawn
//! at random from a fixed pool of 16-character alphanumeric identifiers.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::error::{Error, Result};
use crate::record::LogRow;

const COOKIE_LEN: usize = 16;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+00:00";

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub first_day: NaiveDate,
    pub days: u32,
    pub per_day: u32,
    pub cookies: usize,
}

impl GeneratorConfig {
    /// A log of `days` days, the last of which is yesterday.
    pub fn ending_yesterday(days: u32, per_day: u32, cookies: usize) -> Result<Self> {
        Self::ending_before(Utc::now().date_naive(), days, per_day, cookies)
    }

    /// A log of `days` days, the last of which is the day before `end`.
    pub fn ending_before(
        end: NaiveDate,
        days: u32,
        per_day: u32,
        cookies: usize,
    ) -> Result<Self> {
        let first_day = end
            .checked_sub_signed(Duration::days(i64::from(days)))
            .ok_or_else(|| Error::InvalidArgument {
                value: days.to_string(),
                reason: format!("cannot go back that many days from {}", end),
            })?;
        Ok(GeneratorConfig {
            first_day,
            days,
            per_day,
            cookies,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.cookies == 0 {
            return Err(Error::InvalidArgument {
                value: self.cookies.to_string(),
                reason: "at least one cookie is required".to_string(),
            });
        }
        if self.per_day == 0 || self.per_day > 24 {
            return Err(Error::InvalidArgument {
                value: self.per_day.to_string(),
                reason: "entries per day must be between 1 and 24".to_string(),
            });
        }
        Ok(())
    }
}

pub fn random_cookie<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..COOKIE_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// `count` distinct random cookies.
pub fn cookie_pool<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    let mut pool: Vec<String> = Vec::with_capacity(count);
    while pool.len() < count {
        let cookie = random_cookie(rng);
        if !pool.contains(&cookie) {
            pool.push(cookie);
        }
    }
    pool
}

pub fn timestamps(config: &GeneratorConfig) -> Vec<NaiveDateTime> {
    let midnight = config.first_day.and_time(NaiveTime::MIN);
    (0..config.days)
        .flat_map(|day| {
            (0..config.per_day).map(move |hour| {
                midnight + Duration::days(i64::from(day)) + Duration::hours(i64::from(hour))
            })
        })
        .collect()
}

/// Writes a header plus one row per timestamp. Returns the number of rows.
pub fn write_log<W: Write, R: Rng + ?Sized>(
    out: W,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<u64> {
    config.validate()?;
    let pool = cookie_pool(rng, config.cookies);
    let mut writer = csv::Writer::from_writer(out);
    let mut written = 0;

    for timestamp in timestamps(config) {
        let cookie = pool.choose(rng).cloned().unwrap_or_default();
        writer.serialize(LogRow::new(
            cookie,
            timestamp.format(TIMESTAMP_FORMAT).to_string(),
        ))?;
        written += 1;
    }

    if written == 0 {
        writer.write_record(["cookie", "timestamp"])?;
    }
    writer.flush()?;
    Ok(written)
}

pub fn write_log_file(path: &Path, config: &GeneratorConfig, seed: Option<u64>) -> Result<u64> {
    let start_time = Instant::now();
    info!(action = "start", component = "cookie_gen", file = ?path, days = config.days, per_day = config.per_day, cookies = config.cookies, "Generating cookie log");

    config.validate()?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let file = std::fs::File::create(path)?;
    let written = write_log(file, config, &mut rng)?;

    info!(
        action = "complete",
        component = "cookie_gen",
        rows = written,
        duration_ms = start_time.elapsed().as_millis(),
        "Cookie log written"
    );
    Ok(written)
}
