use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "most-active-cookie",
    about = "Find the most active cookie(s) in a cookie log for a given day",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the cookie log file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Day to analyze (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "cookie-gen",
    about = "Generate a synthetic cookie log for testing",
    version,
    long_about = None
)]
pub struct GenArgs {
    /// Where to write the generated log
    #[arg(short, long, default_value = "cookie_log.csv")]
    pub output: PathBuf,

    /// Number of days to cover, ending today
    #[arg(long, default_value_t = 30)]
    pub days: u32,

    /// Log entries per day
    #[arg(long, default_value_t = 5)]
    pub per_day: u32,

    /// Number of distinct cookies to draw from
    #[arg(long, default_value_t = 5)]
    pub cookies: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
