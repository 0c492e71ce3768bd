//! Run-level error types.
//!
//! A rejected number is not a run error; see [`crate::domain::InvalidToken`].
//! Only the errors here stop a run.

use std::path::PathBuf;

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The input file does not exist
    #[error("{} not found", path.display())]
    MissingInputFile { path: PathBuf },

    /// The input file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
