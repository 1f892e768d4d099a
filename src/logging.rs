//! Builds the `tracing` dispatcher handed to [`crate::CookieAnalyzer`].
//!
//! Nothing here installs a global subscriber. Callers decide whether to set
//! the returned [`Dispatch`] as the process default or to scope it to a
//! single analysis.

use time::macros::format_description;
use tracing::Dispatch;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `info` when verbose and `warn` when not.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "info" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Diagnostics to stderr, keeping stdout free for results.
pub fn stderr_dispatch(verbose: bool) -> Dispatch {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::new(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
        )))
        .with_target(false)
        .finish();
    Dispatch::new(subscriber)
}

/// Plain, untimed output to an arbitrary writer at the given level.
pub fn writer_dispatch<W>(make_writer: W, level: tracing::Level) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(make_writer)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .finish();
    Dispatch::new(subscriber)
}
