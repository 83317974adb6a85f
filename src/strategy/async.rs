//! Asynchronous conversion strategy
//!
//! Reads the input through `tokio::fs` and `csv_async` in chunks of
//! `batch_size` records. Passes still run one at a time: the strategy drives
//! its own current-thread runtime and blocks until the pass completes.
//!
//! # Architecture
//!
//! ```text
//! AsyncConversionStrategy
//!     ├── ConvertConfig (batch_size, strict)
//!     ├── AsyncReader (batch CSV reading)
//!     └── SqlBatchWriter (statement emission)
//! ```

use crate::core::{BatchStats, SqlBatchWriter, SqlRow};
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::open_error;
use crate::strategy::{ConversionStrategy, ConversionSummary, ConvertConfig};
use crate::types::{AuthorRecord, BookRecord, SeedError, SeedTable};
use std::io::Write;
use std::path::Path;

/// Asynchronous conversion strategy
#[derive(Debug, Clone)]
pub struct AsyncConversionStrategy {
    config: ConvertConfig,
}

impl AsyncConversionStrategy {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    async fn convert_rows<T: SqlRow + 'static>(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<BatchStats, SeedError> {
        let file = tokio::fs::File::open(input_path)
            .await
            .map_err(|e| open_error(input_path, e))?;

        // Wrap tokio file in a compatibility layer for csv-async
        let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);

        let mut reader = AsyncReader::<_, T>::new(compat_file);
        let mut writer = SqlBatchWriter::<T>::new(output, self.config.batch_size);

        loop {
            let batch = reader.read_batch(self.config.batch_size).await?;
            if batch.is_empty() {
                break;
            }

            for (line, record) in batch {
                if self.config.strict {
                    record.check_numeric(line)?;
                }
                writer.push(&record)?;
            }
        }

        writer.finish()
    }
}

impl ConversionStrategy for AsyncConversionStrategy {
    fn convert(
        &self,
        table: SeedTable,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ConversionSummary, SeedError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| SeedError::RuntimeError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        let stats = match table {
            SeedTable::Authors => {
                runtime.block_on(self.convert_rows::<AuthorRecord>(input_path, output))?
            }
            SeedTable::Books => {
                runtime.block_on(self.convert_rows::<BookRecord>(input_path, output))?
            }
        };

        Ok(ConversionSummary::new(table, stats))
    }
}
