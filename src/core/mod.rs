//! Core conversion logic
//!
//! This module contains the pieces shared by every conversion pass:
//! - `sql` - Quote escaping and INSERT statement rendering
//! - `traits` - The `SqlRow` abstraction implemented by each record type
//! - `batch_writer` - Batch accumulation and statement emission

pub mod batch_writer;
pub mod sql;
pub mod traits;

pub use batch_writer::{BatchStats, SqlBatchWriter};
pub use sql::{escape_sql_string, quote_literal, render_insert};
pub use traits::SqlRow;
