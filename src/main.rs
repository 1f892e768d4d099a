use anyhow::{Context, Result};
use clap::Parser;
use most_active_cookie::{logging, output, Args, CookieAnalyzer};
use std::process;

fn main() -> Result<()> {
    let args = Args::parse();
    let analyzer = CookieAnalyzer::with_dispatch(logging::stderr_dispatch(args.verbose));

    match analyzer.analyze(&args.file, &args.date) {
        Ok(analysis) => {
            output::print_cookies(analysis.cookies()).context("Failed to write results")?;
            Ok(())
        }
        // already reported through the analyzer's dispatcher
        Err(e) => process::exit(e.exit_code()),
    }
}
