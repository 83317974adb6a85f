//! Runs conversion passes over an input/output directory pair
//!
//! Passes run one after another in the order given. Each pass holds its
//! input and output handles only for its own duration. The first failure
//! stops the run; scripts finished by earlier passes are left in place.

use crate::strategy::{ConversionStrategy, ConversionSummary};
use crate::types::{SeedError, SeedTable};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where to read CSV files from and write SQL scripts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub tables: Vec<SeedTable>,
}

impl Default for PipelineOptions {
    /// Both tables, current working directory for input and output
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            tables: SeedTable::ALL.to_vec(),
        }
    }
}

/// Run every requested pass with `strategy`
pub fn run(
    strategy: &dyn ConversionStrategy,
    options: &PipelineOptions,
) -> Result<Vec<ConversionSummary>, SeedError> {
    let mut summaries = Vec::with_capacity(options.tables.len());

    for &table in &options.tables {
        let input_path = options.input_dir.join(table.input_file_name());
        let output_path = options.output_dir.join(table.output_file_name());

        tracing::info!("Generating {} INSERT statements...", table.label());
        let summary = run_pass(strategy, table, &input_path, &output_path)?;
        tracing::info!(
            rows = summary.rows,
            statements = summary.statements,
            output = %output_path.display(),
            "{} inserts generated!",
            capitalize(table.label())
        );

        summaries.push(summary);
    }

    Ok(summaries)
}

fn run_pass(
    strategy: &dyn ConversionStrategy,
    table: SeedTable,
    input_path: &Path,
    output_path: &Path,
) -> Result<ConversionSummary, SeedError> {
    // Leave no output file behind when there is nothing to read
    if !input_path.exists() {
        return Err(SeedError::file_not_found(input_path));
    }

    let file = File::create(output_path).map_err(|e| SeedError::IoError {
        message: format!("Failed to create '{}': {}", output_path.display(), e),
    })?;
    let mut output = BufWriter::new(file);

    let summary = strategy.convert(table, input_path, &mut output)?;
    output.flush()?;

    Ok(summary)
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{ConvertConfig, SyncConversionStrategy};
    use std::fs;
    use tempfile::TempDir;

    fn options(dir: &TempDir, tables: Vec<SeedTable>) -> PipelineOptions {
        PipelineOptions {
            input_dir: dir.path().to_path_buf(),
            output_dir: dir.path().to_path_buf(),
            tables,
        }
    }

    fn strategy() -> SyncConversionStrategy {
        SyncConversionStrategy::new(ConvertConfig::default())
    }

    #[test]
    fn test_run_writes_both_scripts_in_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("authors.csv"), "first_name,last_name\nJohn,Doe\n").unwrap();
        fs::write(dir.path().join("books.csv"), "author_id,title\n1,Dune\n").unwrap();

        let summaries = run(&strategy(), &options(&dir, SeedTable::ALL.to_vec())).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].table, SeedTable::Authors);
        assert_eq!(summaries[1].table, SeedTable::Books);
        assert_eq!(
            fs::read_to_string(dir.path().join("insert_authors.sql")).unwrap(),
            "INSERT INTO author (first_name, last_name) VALUES\n('John', 'Doe');\n\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("insert_books.sql")).unwrap(),
            "INSERT INTO book (author_id, title, price, description) VALUES\n\
             (1, 'Dune', 9.99, 'A captivating read.');\n\n"
        );
    }

    #[test]
    fn test_missing_input_creates_no_output() {
        let dir = TempDir::new().unwrap();

        let result = run(&strategy(), &options(&dir, vec![SeedTable::Authors]));

        assert!(matches!(result, Err(SeedError::FileNotFound { .. })));
        assert!(!dir.path().join("insert_authors.sql").exists());
    }

    #[test]
    fn test_unreadable_input_is_io_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("authors.csv")).unwrap();

        let result = run(&strategy(), &options(&dir, vec![SeedTable::Authors]));

        assert!(matches!(result, Err(SeedError::IoError { .. })));
    }

    #[test]
    fn test_failed_books_pass_keeps_author_script() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("authors.csv"), "first_name,last_name\nJohn,Doe\n").unwrap();

        let result = run(&strategy(), &options(&dir, SeedTable::ALL.to_vec()));

        assert!(matches!(result, Err(SeedError::FileNotFound { .. })));
        assert!(dir.path().join("insert_authors.sql").exists());
        assert!(!dir.path().join("insert_books.sql").exists());
    }

    #[test]
    fn test_existing_output_is_truncated() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("authors.csv"), "first_name,last_name\n").unwrap();
        fs::write(dir.path().join("insert_authors.sql"), "stale").unwrap();

        run(&strategy(), &options(&dir, vec![SeedTable::Authors])).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("insert_authors.sql")).unwrap(),
            ""
        );
    }

    #[test]
    fn test_default_options() {
        let options = PipelineOptions::default();
        assert_eq!(options.input_dir, PathBuf::from("."));
        assert_eq!(options.tables, vec![SeedTable::Authors, SeedTable::Books]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("author"), "Author");
        assert_eq!(capitalize(""), "");
    }
}
