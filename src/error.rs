//! Error types for loading and filtering book records.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a run.
///
/// Lines with the wrong number of fields are not errors; they are dropped
/// by the loader. Everything here terminates the process.
#[derive(Debug, Error)]
pub enum BookError {
    /// The input file could not be opened or read.
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line with seven fields carried a value that is not a valid number.
    #[error("line {line}: invalid {field} '{value}': {reason}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The year filter answer was not an integer.
    #[error("invalid year '{value}': expected an integer")]
    InvalidYear { value: String },

    /// Standard input ended before a prompt was answered.
    #[error("input ended while waiting for {prompt}")]
    InputClosed { prompt: &'static str },

    /// Console or stream I/O failed outside of opening the input file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
