//! Bookstore Seed Library
//! # Overview
//!
//! This library turns the bookstore seed CSV files into SQL scripts of batched
//! multi-row INSERT statements, with a sync and an async reading strategy.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Row records, seed tables and the error type
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Conversion logic:
//!   - [`core::sql`] - Quote escaping and statement rendering
//!   - [`core::traits`] - The `SqlRow` trait implemented by each record
//!   - [`core::batch_writer`] - Batch accumulation and flushing
//! - [`io`] - CSV readers
//! - [`strategy`] - Interchangeable conversion strategies
//! - [`pipeline`] - Runs the passes over an input/output directory pair
//! - [`logging`] - tracing subscriber setup
//!
//! # Output
//!
//! | Input         | Output               | Table    |
//! |---------------|----------------------|----------|
//! | `authors.csv` | `insert_authors.sql` | `author` |
//! | `books.csv`   | `insert_books.sql`   | `book`   |
//!
//! Every statement holds at most `batch_size` tuples (1000 by default) and
//! is followed by a blank line.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod strategy;
pub mod types;

pub use crate::core::{escape_sql_string, SqlBatchWriter, SqlRow};
pub use pipeline::{run, PipelineOptions};
pub use strategy::{create_strategy, ConversionStrategy, ConversionSummary, ConvertConfig};
pub use types::{AuthorRecord, BookRecord, SeedError, SeedTable};
