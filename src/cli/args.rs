use crate::strategy::ConvertConfig;
use crate::types::SeedTable;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Generate batched SQL INSERT scripts from the bookstore seed CSV files
#[derive(Parser, Debug)]
#[command(name = "bookstore-seed")]
#[command(
    about = "Generate batched SQL INSERT scripts from authors.csv and books.csv",
    long_about = None
)]
pub struct CliArgs {
    /// Directory containing authors.csv and books.csv
    #[arg(long = "input-dir", value_name = "DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// Directory receiving insert_authors.sql and insert_books.sql
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Restrict generation to the given tables (repeatable)
    #[arg(long = "only", value_name = "TABLE")]
    pub only: Vec<SeedTable>,

    /// Reading strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Reading strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of tuples per INSERT statement
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of tuples per INSERT statement (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Reject book rows whose author_id or price is not a number
    #[arg(long = "strict")]
    pub strict: bool,

    /// Log level (RUST_LOG directives are applied on top)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}

/// Available reading strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a ConvertConfig from CLI arguments
    pub fn to_convert_config(&self) -> ConvertConfig {
        match self.batch_size {
            Some(batch_size) => ConvertConfig::new(batch_size, self.strict),
            None => ConvertConfig {
                strict: self.strict,
                ..ConvertConfig::default()
            },
        }
    }

    /// Tables to convert, always in authors-then-books order
    pub fn tables(&self) -> Vec<SeedTable> {
        SeedTable::ALL
            .into_iter()
            .filter(|table| self.only.is_empty() || self.only.contains(table))
            .collect()
    }
}
