//! Error taxonomy for slice verification

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or comparing MBP slices.
///
/// None of these are recovered locally; they propagate to the binary
/// boundary where they terminate the run with a diagnostic.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Input file does not exist or could not be opened
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Malformed delimited data
    #[error("failed to parse {path} (line {line}): {message}")]
    Parse {
        path: PathBuf,
        /// 1-based line in the source file (header is line 1)
        line: usize,
        message: String,
    },

    /// A requested column is absent from a file's actual header
    #[error("column `{column}` missing from header of {path}")]
    ColumnMissing { column: String, path: PathBuf },

    /// Raised only under `LengthPolicy::Error`
    #[error("slice length mismatch: reference has {reference} rows, candidate has {candidate}")]
    LengthMismatch { reference: usize, candidate: usize },
}

/// Convenience alias used throughout the library
pub type Result<T> = std::result::Result<T, CheckError>;
