//! I/O module
//!
//! Handles CSV input.
//!
//! # Components
//!
//! - `csv_format` - Reader configuration shared by both readers
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use sync_reader::SyncReader;
