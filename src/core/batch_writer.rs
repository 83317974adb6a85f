//! Batch accumulation and statement emission
//!
//! `SqlBatchWriter` collects rendered tuples and writes one INSERT statement
//! each time `batch_size` tuples have been collected. `finish` writes the
//! remainder. Tuples are written in the order they are pushed, each exactly
//! once, and no statement is ever written for an empty batch.

use crate::core::sql::render_insert;
use crate::core::traits::SqlRow;
use crate::types::SeedError;
use std::io::Write;
use std::marker::PhantomData;

/// Counts reported after a writer is finished
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Tuples written
    pub rows: usize,
    /// INSERT statements written
    pub statements: usize,
}

/// Accumulates tuples for one table and flushes them as INSERT statements
pub struct SqlBatchWriter<'a, T: SqlRow> {
    output: &'a mut dyn Write,
    batch_size: usize,
    batch: Vec<String>,
    stats: BatchStats,
    _row: PhantomData<T>,
}

impl<'a, T: SqlRow> SqlBatchWriter<'a, T> {
    /// Create a writer that flushes every `batch_size` tuples
    ///
    /// A `batch_size` of zero is treated as one.
    pub fn new(output: &'a mut dyn Write, batch_size: usize) -> Self {
        let batch_size = batch_size.max(1);
        Self {
            output,
            batch_size,
            batch: Vec::with_capacity(batch_size),
            stats: BatchStats::default(),
            _row: PhantomData,
        }
    }

    /// Render `row` and add it to the current batch, flushing when full
    pub fn push(&mut self, row: &T) -> Result<(), SeedError> {
        self.batch.push(row.to_sql_tuple());
        if self.batch.len() >= self.batch_size {
            self.flush_batch()?;
        }
        Ok(())
    }

    /// Write any remaining tuples and return the totals
    pub fn finish(mut self) -> Result<BatchStats, SeedError> {
        if !self.batch.is_empty() {
            self.flush_batch()?;
        }
        self.output.flush()?;
        Ok(self.stats)
    }

    fn flush_batch(&mut self) -> Result<(), SeedError> {
        let statement = render_insert(T::TABLE, T::COLUMNS, &self.batch);
        self.output.write_all(statement.as_bytes())?;

        self.stats.rows += self.batch.len();
        self.stats.statements += 1;
        tracing::debug!(
            table = T::TABLE,
            tuples = self.batch.len(),
            "flushed INSERT statement"
        );

        self.batch.clear();
        Ok(())
    }
}
