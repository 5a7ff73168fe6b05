//! Whole-file helpers. No streaming: each file is read or written in one go.

use std::fs;
use std::path::Path;

use super::errors::CliError;

/// Reads the entire file at `path`, refusing files above `max_size` bytes
/// when `max_size` is non-zero.
pub fn read_file(path: &Path, max_size: usize) -> Result<Vec<u8>, CliError> {
    if max_size > 0 {
        let size = fs::metadata(path)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        if size > max_size as u64 {
            return Err(CliError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit: max_size,
            });
        }
    }

    fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates or truncates the file at `path` and writes `data` into it.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), CliError> {
    fs::write(path, data).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
