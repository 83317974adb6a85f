//! Synchronous conversion strategy
//!
//! Streams records through `SyncReader` one at a time and hands each to a
//! `SqlBatchWriter`. Memory use is bounded by one batch of rendered tuples.

use crate::core::{BatchStats, SqlBatchWriter, SqlRow};
use crate::io::sync_reader::SyncReader;
use crate::strategy::{ConversionStrategy, ConversionSummary, ConvertConfig};
use crate::types::{AuthorRecord, BookRecord, SeedError, SeedTable};
use std::io::Write;
use std::path::Path;

/// Synchronous conversion strategy
///
/// # Examples
///
/// ```no_run
/// use bookstore_seed::strategy::{ConversionStrategy, ConvertConfig, SyncConversionStrategy};
/// use bookstore_seed::types::SeedTable;
/// use std::path::Path;
///
/// let strategy = SyncConversionStrategy::new(ConvertConfig::default());
/// let mut output = Vec::new();
///
/// strategy
///     .convert(SeedTable::Authors, Path::new("authors.csv"), &mut output)
///     .expect("Conversion failed");
/// ```
#[derive(Debug, Clone)]
pub struct SyncConversionStrategy {
    config: ConvertConfig,
}

impl SyncConversionStrategy {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    fn convert_rows<T: SqlRow>(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<BatchStats, SeedError> {
        let reader = SyncReader::<T>::new(input_path)?;
        let mut writer = SqlBatchWriter::<T>::new(output, self.config.batch_size);

        for result in reader {
            let (line, record) = result?;
            if self.config.strict {
                record.check_numeric(line)?;
            }
            writer.push(&record)?;
        }

        writer.finish()
    }
}

impl ConversionStrategy for SyncConversionStrategy {
    fn convert(
        &self,
        table: SeedTable,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ConversionSummary, SeedError> {
        let stats = match table {
            SeedTable::Authors => self.convert_rows::<AuthorRecord>(input_path, output)?,
            SeedTable::Books => self.convert_rows::<BookRecord>(input_path, output)?,
        };

        Ok(ConversionSummary::new(table, stats))
    }
}
