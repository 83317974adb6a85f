//! Conversion strategy module
//!
//! This module defines the Strategy pattern for a complete conversion pass:
//! reading one CSV file and writing its INSERT script. The synchronous and
//! asynchronous readers are selected at runtime and produce identical output.

use crate::cli::StrategyType;
use crate::core::BatchStats;
use crate::types::{SeedError, SeedTable};
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::AsyncConversionStrategy;
pub use sync::SyncConversionStrategy;

/// Tuples per INSERT statement unless configured otherwise
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Configuration shared by both strategies
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Maximum tuples per INSERT statement
    pub batch_size: usize,
    /// Reject book rows whose `author_id` or `price` is not a number
    pub strict: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            strict: false,
        }
    }
}

impl ConvertConfig {
    /// Create a ConvertConfig with custom values
    ///
    /// A zero `batch_size` falls back to the default with a warning.
    pub fn new(batch_size: usize, strict: bool) -> Self {
        let batch_size = if batch_size == 0 {
            tracing::warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                DEFAULT_BATCH_SIZE
            );
            DEFAULT_BATCH_SIZE
        } else {
            batch_size
        };

        Self { batch_size, strict }
    }
}

/// Outcome of one conversion pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConversionSummary {
    pub table: SeedTable,
    pub rows: usize,
    pub statements: usize,
}

impl ConversionSummary {
    pub fn new(table: SeedTable, stats: BatchStats) -> Self {
        Self {
            table,
            rows: stats.rows,
            statements: stats.statements,
        }
    }
}

/// Conversion strategy trait for complete conversion passes
pub trait ConversionStrategy: Send + Sync {
    /// Convert the CSV at `input_path` into INSERT statements for `table`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened
    /// - A row is malformed or lacks a required column
    /// - A numeric book column does not parse (strict mode)
    /// - Output cannot be written
    ///
    /// Every error is fatal. Statements already written stay in `output`.
    fn convert(
        &self,
        table: SeedTable,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ConversionSummary, SeedError>;
}

/// Create a conversion strategy based on the specified strategy type
pub fn create_strategy(
    strategy_type: StrategyType,
    config: ConvertConfig,
) -> Box<dyn ConversionStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncConversionStrategy::new(config)),
        StrategyType::Async => Box::new(AsyncConversionStrategy::new(config)),
    }
}
