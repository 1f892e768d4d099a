use anyhow::{Context, Result};
use clap::Parser;
use most_active_cookie::generator::{self, GeneratorConfig};
use most_active_cookie::{logging, GenArgs};

fn main() -> Result<()> {
    let args = GenArgs::parse();
    tracing::dispatcher::set_global_default(logging::stderr_dispatch(args.verbose))
        .context("Failed to install logger")?;

    let config = GeneratorConfig::ending_yesterday(args.days, args.per_day, args.cookies)
        .context("Invalid generator settings")?;
    let written = generator::write_log_file(&args.output, &config, args.seed)
        .with_context(|| format!("Failed to generate {:?}", args.output))?;

    println!("Wrote {} entries to {}", written, args.output.display());
    Ok(())
}
