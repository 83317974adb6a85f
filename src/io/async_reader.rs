//! Asynchronous CSV reader with batch interface
//!
//! Provides batch reads over row records from any `futures` `AsyncRead`.
//!
//! # Architecture
//!
//! ```text
//! tokio File → compat → AsyncReader → Vec<(line, record)>
//!                           ↓
//!                     csv_format module
//!                  (async_reader_builder)
//! ```

use crate::io::csv_format::{async_reader_builder, short_record_error};
use crate::types::SeedError;
use csv_async::StringRecord;
use futures::io::AsyncRead;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Asynchronous CSV reader
///
/// Line numbers and row-length rules follow `SyncReader`.
pub struct AsyncReader<R: AsyncRead + Unpin + Send, T> {
    csv_reader: csv_async::AsyncReader<R>,
    headers: Option<StringRecord>,
    _record: PhantomData<T>,
}

impl<R, T> AsyncReader<R, T>
where
    R: AsyncRead + Unpin + Send + 'static,
    T: DeserializeOwned + 'static,
{
    /// Create a new AsyncReader over `reader`
    pub fn new(reader: R) -> Self {
        let csv_reader = async_reader_builder().create_reader(reader);

        Self {
            csv_reader,
            headers: None,
            _record: PhantomData,
        }
    }

    async fn headers(&mut self) -> Result<StringRecord, SeedError> {
        if let Some(headers) = &self.headers {
            return Ok(headers.clone());
        }

        let headers = self
            .csv_reader
            .headers()
            .await
            .map_err(|e| csv_error(&e))?
            .clone();
        self.headers = Some(headers.clone());
        Ok(headers)
    }

    /// Read up to `batch_size` records
    ///
    /// Returns an empty vector once the end of the file is reached. The first
    /// malformed record ends the read with an error.
    pub async fn read_batch(&mut self, batch_size: usize) -> Result<Vec<(u64, T)>, SeedError> {
        let headers = self.headers().await?;
        let mut batch = Vec::with_capacity(batch_size);
        let mut record = StringRecord::new();

        while batch.len() < batch_size {
            let has_record = self
                .csv_reader
                .read_record(&mut record)
                .await
                .map_err(|e| csv_error(&e))?;
            if !has_record {
                break;
            }

            let line = record
                .position()
                .map_or_else(|| self.csv_reader.position().line(), |pos| pos.line());
            if record.len() < headers.len() {
                return Err(short_record_error(line, record.len(), headers.len()));
            }

            let row = record
                .deserialize::<T>(Some(&headers))
                .map_err(|e| SeedError::parse_error(line, e))?;
            batch.push((line, row));
        }

        Ok(batch)
    }
}

fn csv_error(error: &csv_async::Error) -> SeedError {
    if error.is_io_error() {
        return SeedError::IoError {
            message: error.to_string(),
        };
    }

    SeedError::ParseError {
        line: error.position().map(|pos| pos.line()),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AuthorRecord, BookRecord, DEFAULT_DESCRIPTION};
    use futures::io::Cursor;

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let csv_content = "first_name,last_name\nJohn,Doe\nJane,Smith\nAnn,Lee\n";
        let mut reader = AsyncReader::<_, AuthorRecord>::new(Cursor::new(csv_content.as_bytes()));

        let batch = reader.read_batch(2).await.unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].0, 2);
        assert_eq!(batch[0].1.first_name, "John");
        assert_eq!(batch[1].1.first_name, "Jane");

        let batch = reader.read_batch(2).await.unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].0, 4);
        assert_eq!(batch[0].1.first_name, "Ann");

        let batch = reader.read_batch(2).await.unwrap();
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_csv() {
        let csv_content = "first_name,last_name\n";
        let mut reader = AsyncReader::<_, AuthorRecord>::new(Cursor::new(csv_content.as_bytes()));

        let batch = reader.read_batch(10).await.unwrap();
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_missing_column_is_error() {
        let csv_content = "author_id,price\n1,9.99\n";
        let mut reader = AsyncReader::<_, BookRecord>::new(Cursor::new(csv_content.as_bytes()));

        let error = reader.read_batch(10).await.unwrap_err();
        assert!(matches!(error, SeedError::ParseError { line: Some(2), .. }));
        assert!(error.to_string().contains("title"));
    }

    #[tokio::test]
    async fn test_async_reader_ignores_fields_past_header() {
        let csv_content = "first_name,last_name\nJohn,Doe,\nJane,Smith,x,y\n";
        let mut reader = AsyncReader::<_, AuthorRecord>::new(Cursor::new(csv_content.as_bytes()));

        let batch = reader.read_batch(10).await.unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].1.last_name, "Doe");
        assert_eq!(batch[1].1.last_name, "Smith");
    }

    #[tokio::test]
    async fn test_async_reader_rejects_short_row() {
        let csv_content = "first_name,last_name\nJohn,Doe\nJane\n";
        let mut reader = AsyncReader::<_, AuthorRecord>::new(Cursor::new(csv_content.as_bytes()));

        let error = reader.read_batch(10).await.unwrap_err();
        assert!(matches!(error, SeedError::ParseError { line: Some(3), .. }));
    }

    #[tokio::test]
    async fn test_async_reader_lines_follow_multiline_fields() {
        let csv_content = "first_name,last_name\n\"Ann\nMarie\",Lee\nBob,\"Two\nLines\"\nCy,Ray\n";
        let mut reader = AsyncReader::<_, AuthorRecord>::new(Cursor::new(csv_content.as_bytes()));

        let batch = reader.read_batch(10).await.unwrap();
        let lines: Vec<u64> = batch.iter().map(|(line, _)| *line).collect();
        assert_eq!(lines, vec![2, 4, 6]);
    }

    #[tokio::test]
    async fn test_async_reader_book_defaults_and_empty_values() {
        let csv_content = "author_id,title,price\n1,Dune,\n";
        let mut reader = AsyncReader::<_, BookRecord>::new(Cursor::new(csv_content.as_bytes()));

        let batch = reader.read_batch(10).await.unwrap();
        assert_eq!(batch[0].1.price, "");
        assert_eq!(batch[0].1.description, DEFAULT_DESCRIPTION);
    }
}
