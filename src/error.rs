//! Error types for the sensor-log statistics library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for log parsing and reporting operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when discovering, parsing or summarising log files.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error occurred while reading a log file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The discovery root is missing or is not a directory
    #[error("'{}' is not a valid directory", .0.display())]
    NotADirectory(PathBuf),

    /// A data line after the header could not be parsed
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Mean or variance requested over an empty set of readings
    #[error("Cannot compute statistics over zero power readings")]
    EmptyStatistics,

    /// File name does not encode a node count
    #[error("Invalid file name '{file_name}': {reason}")]
    InvalidFileName { file_name: String, reason: String },
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_file_name(file_name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidFileName {
            file_name: file_name.to_string(),
            reason: reason.into(),
        }
    }
}
