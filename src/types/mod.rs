//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Author and book row records
//! - `table`: The tables being seeded and their file names
//! - `error`: Error types for the seed generator

pub mod error;
pub mod record;
pub mod table;

pub use error::SeedError;
pub use record::{AuthorRecord, BookRecord, DEFAULT_DESCRIPTION, DEFAULT_PRICE};
pub use table::SeedTable;
