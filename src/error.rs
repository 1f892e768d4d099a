use std::fmt;
use std::io;
use std::path::PathBuf;

/// A type alias for `Result<T, most_active_cookie::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop an analysis before it produces a result.
///
/// Rows with unreadable timestamps are not errors; they surface as
/// [`crate::record::SkipReason`] values instead.
#[derive(Debug)]
pub enum Error {
    /// The target date was not a `YYYY-MM-DD` calendar date.
    InvalidArgument { value: String, reason: String },
    /// The log file does not exist or could not be opened.
    NotFound { path: PathBuf, source: io::Error },
    /// Any other I/O failure, e.g. writing results.
    Io(io::Error),
    /// A CSV failure outside the row scan, e.g. while writing a generated log.
    Csv(csv::Error),
}

impl Error {
    /// Process exit code used by the `most-active-cookie` binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument { .. } => 2,
            Error::NotFound { .. } => 1,
            Error::Io(_) | Error::Csv(_) => 1,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::Csv(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { value, reason } => write!(
                f,
                "Invalid date '{}': {}. Please use YYYY-MM-DD.",
                value, reason
            ),
            Error::NotFound { path, source } => {
                write!(f, "Invalid file path {:?}: {}", path, source)
            }
            Error::Io(err) => err.fmt(f),
            Error::Csv(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidArgument { .. } => None,
            Error::NotFound { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
        }
    }
}
