//! Error types for the seed generator
//!
//! Every error here is fatal: the current pass stops and the run exits
//! with a non-zero status. Output written so far is left as it is.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: input file not found, unwritable output, etc.
//! - **CSV Parsing Errors**: malformed CSV, missing required columns
//! - **Validation Errors**: non-numeric book columns (strict mode only)
//! - **Runtime Errors**: the async runtime could not be started

use thiserror::Error;

/// Main error type for the seed generator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeedError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Covers malformed rows, ragged rows and rows missing a required column.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A numeric book column did not parse (strict mode)
    #[error("Invalid {column} '{value}' at line {line}")]
    InvalidNumber {
        /// Line of the offending row
        line: u64,
        /// Column name (`author_id` or `price`)
        column: String,
        /// The raw column text
        value: String,
    },

    /// The async runtime could not be created
    #[error("Runtime error: {message}")]
    RuntimeError {
        /// Description of the runtime failure
        message: String,
    },
}

// Conversion from io::Error to SeedError
impl From<std::io::Error> for SeedError {
    fn from(error: std::io::Error) -> Self {
        SeedError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to SeedError
impl From<csv::Error> for SeedError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return SeedError::IoError {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        SeedError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl SeedError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        SeedError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a ParseError with a known line
    pub fn parse_error(line: u64, message: impl ToString) -> Self {
        SeedError::ParseError {
            line: Some(line),
            message: message.to_string(),
        }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(line: u64, column: &str, value: &str) -> Self {
        SeedError::InvalidNumber {
            line,
            column: column.to_string(),
            value: value.to_string(),
        }
    }
}
