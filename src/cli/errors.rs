use std::fmt;
use std::io;
use std::path::PathBuf;

use super::args::USAGE;

/// Failures of the command line layer. The codec itself cannot fail.
#[derive(Debug)]
pub enum CliError {
    /// The command line did not match the expected shape
    Usage,
    /// Settings could not be assembled
    Config(String),
    /// The input file could not be read
    Read { path: PathBuf, source: io::Error },
    /// The output file could not be written
    Write { path: PathBuf, source: io::Error },
    /// The input file exceeds the configured `max_size`
    TooLarge { path: PathBuf, size: u64, limit: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage => write!(f, "usage: {}", USAGE),
            CliError::Config(message) => write!(f, "invalid configuration: {}", message),
            CliError::Read { path, source } => {
                write!(f, "cannot read '{}': {}", path.display(), source)
            }
            CliError::Write { path, source } => {
                write!(f, "cannot write '{}': {}", path.display(), source)
            }
            CliError::TooLarge { path, size, limit } => write!(
                f,
                "'{}' is {} bytes, above the max_size limit of {} bytes",
                path.display(),
                size,
                limit
            ),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Read { source, .. } | CliError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}
