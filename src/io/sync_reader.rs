//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over row records of a CSV file. Records
//! are read one at a time, so memory use does not grow with the file size.
//!
//! ```no_run
//! use bookstore_seed::io::sync_reader::SyncReader;
//! use bookstore_seed::types::AuthorRecord;
//! use std::path::Path;
//!
//! let reader = SyncReader::<AuthorRecord>::new(Path::new("authors.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok((line, author)) => println!("line {}: {:?}", line, author),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Opening errors (file not found, permissions) are returned from `new()`
//! - Parse errors are yielded as `Err` items carrying the line where the
//!   offending record starts
//! - Rows shorter than the header are errors; fields past the header are
//!   ignored

use crate::io::csv_format::{open_error, short_record_error, sync_reader_builder};
use crate::types::SeedError;
use csv::StringRecord;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::marker::PhantomData;
use std::path::Path;

/// Synchronous CSV reader
///
/// Yields `(line, record)` pairs in file order. The line is the one the
/// record starts on, counting the header as line 1.
#[derive(Debug)]
pub struct SyncReader<T> {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
    _record: PhantomData<T>,
}

impl<T: DeserializeOwned> SyncReader<T> {
    /// Open `path` for streaming iteration
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if the file opened
    /// * `Err(SeedError::FileNotFound)` if it does not exist
    /// * `Err(SeedError::IoError)` for any other open failure
    pub fn new(path: &Path) -> Result<Self, SeedError> {
        let file = File::open(path).map_err(|e| open_error(path, e))?;
        let mut reader = sync_reader_builder().from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            _record: PhantomData,
        })
    }

    fn read_next(&mut self) -> Result<Option<(u64, T)>, SeedError> {
        if !self.reader.read_record(&mut self.record)? {
            return Ok(None);
        }

        let line = self
            .record
            .position()
            .map_or_else(|| self.reader.position().line(), |pos| pos.line());
        if self.record.len() < self.headers.len() {
            return Err(short_record_error(line, self.record.len(), self.headers.len()));
        }

        let record = self
            .record
            .deserialize::<T>(Some(&self.headers))
            .map_err(|e| SeedError::parse_error(line, e))?;
        Ok(Some((line, record)))
    }
}

impl<T: DeserializeOwned> Iterator for SyncReader<T> {
    type Item = Result<(u64, T), SeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}
