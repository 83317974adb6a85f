//! Bookstore Seed CLI
//!
//! Generates SQL seed scripts from `authors.csv` and `books.csv`.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --input-dir data --output-dir db/seed
//! cargo run -- --only books --batch-size 500 --strict
//! cargo run -- --strategy async
//! ```
//!
//! With no arguments, both CSV files are read from the current directory and
//! `insert_authors.sql` and `insert_books.sql` are written next to them.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (input file not found, malformed CSV, I/O failure, etc.)

use bookstore_seed::pipeline::{self, PipelineOptions};
use bookstore_seed::{cli, logging, strategy};
use std::process;

fn main() {
    let args = cli::parse_args();

    if let Err(e) = logging::setup_logger(args.log_level) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let strategy = strategy::create_strategy(args.strategy.clone(), args.to_convert_config());
    let options = PipelineOptions {
        input_dir: args.input_dir.clone(),
        output_dir: args.output_dir.clone(),
        tables: args.tables(),
    };

    match pipeline::run(strategy.as_ref(), &options) {
        Ok(summaries) => {
            let files: Vec<&str> = summaries
                .iter()
                .map(|summary| summary.table.output_file_name())
                .collect();
            tracing::info!("Done! Created {}", files.join(" and "));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
