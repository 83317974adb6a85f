//! CSV reader configuration shared by both readers
//!
//! Fields are taken exactly as written: no trimming. Both readers are
//! flexible so that a row may carry fields past the header (a trailing comma,
//! say); the readers drop those and reject rows shorter than the header.
//! Columns are matched by header name, so their order in the file does not
//! matter.

use crate::types::SeedError;
use std::path::Path;

/// Read buffer size for the synchronous reader
pub const READ_BUFFER_CAPACITY: usize = 8 * 1024;

/// Builder for the synchronous `csv` reader
pub fn sync_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .buffer_capacity(READ_BUFFER_CAPACITY);
    builder
}

/// Builder for the asynchronous `csv_async` reader
pub fn async_reader_builder() -> csv_async::AsyncReaderBuilder {
    let mut builder = csv_async::AsyncReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .trim(csv_async::Trim::None);
    builder
}

/// Map a failure to open an input file to a `SeedError`
pub fn open_error(path: &Path, error: std::io::Error) -> SeedError {
    if error.kind() == std::io::ErrorKind::NotFound {
        SeedError::file_not_found(path)
    } else {
        SeedError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), error),
        }
    }
}

/// Error for a row with fewer fields than the header
pub fn short_record_error(line: u64, fields: usize, header_fields: usize) -> SeedError {
    SeedError::parse_error(
        line,
        format!(
            "found record with {} fields, but the header has {} fields",
            fields, header_fields
        ),
    )
}
