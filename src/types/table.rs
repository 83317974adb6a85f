//! Seed tables and their file names
//!
//! Each conversion pass is identified by a `SeedTable`, which fixes the CSV
//! file it reads, the SQL script it writes and the label used in log output.

use clap::ValueEnum;
use std::fmt;

/// A table that the generator knows how to seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SeedTable {
    /// `authors.csv` → `insert_authors.sql`
    Authors,

    /// `books.csv` → `insert_books.sql`
    Books,
}

impl SeedTable {
    /// All tables in the order they are converted
    pub const ALL: [SeedTable; 2] = [SeedTable::Authors, SeedTable::Books];

    /// Name of the CSV file this pass reads
    pub fn input_file_name(self) -> &'static str {
        match self {
            SeedTable::Authors => "authors.csv",
            SeedTable::Books => "books.csv",
        }
    }

    /// Name of the SQL script this pass writes
    pub fn output_file_name(self) -> &'static str {
        match self {
            SeedTable::Authors => "insert_authors.sql",
            SeedTable::Books => "insert_books.sql",
        }
    }

    /// Singular label used in progress messages ("author", "book")
    pub fn label(self) -> &'static str {
        match self {
            SeedTable::Authors => "author",
            SeedTable::Books => "book",
        }
    }
}

impl fmt::Display for SeedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedTable::Authors => write!(f, "authors"),
            SeedTable::Books => write!(f, "books"),
        }
    }
}
