//! Core traits for rendering row records as SQL
//!
//! This module defines the `SqlRow` abstraction that lets one generic
//! conversion routine handle both the author and the book pass.

use crate::core::sql::quote_literal;
use crate::types::{AuthorRecord, BookRecord, SeedError};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::str::FromStr;

/// A CSV row that renders into one tuple of an INSERT statement
pub trait SqlRow: DeserializeOwned {
    /// Target SQL table
    const TABLE: &'static str;

    /// Column list, in tuple order
    const COLUMNS: &'static [&'static str];

    /// Render this row as a parenthesized tuple literal
    fn to_sql_tuple(&self) -> String;

    /// Check that the unquoted columns hold numbers
    ///
    /// Only called in strict mode. `line` is used for error reporting.
    fn check_numeric(&self, _line: u64) -> Result<(), SeedError> {
        Ok(())
    }
}

impl SqlRow for AuthorRecord {
    const TABLE: &'static str = "author";
    const COLUMNS: &'static [&'static str] = &["first_name", "last_name"];

    fn to_sql_tuple(&self) -> String {
        format!(
            "({}, {})",
            quote_literal(&self.first_name),
            quote_literal(&self.last_name)
        )
    }
}

impl SqlRow for BookRecord {
    const TABLE: &'static str = "book";
    const COLUMNS: &'static [&'static str] = &["author_id", "title", "price", "description"];

    fn to_sql_tuple(&self) -> String {
        // author_id and price go in verbatim
        format!(
            "({}, {}, {}, {})",
            self.author_id,
            quote_literal(&self.title),
            self.price,
            quote_literal(&self.description)
        )
    }

    fn check_numeric(&self, line: u64) -> Result<(), SeedError> {
        if self.author_id.parse::<i64>().is_err() {
            return Err(SeedError::invalid_number(line, "author_id", &self.author_id));
        }
        if !is_plain_decimal(&self.price) || Decimal::from_str(&self.price).is_err() {
            return Err(SeedError::invalid_number(line, "price", &self.price));
        }
        Ok(())
    }
}

/// Optional sign, digits, at most one `.`
///
/// `Decimal::from_str` also accepts `_` separators, which are not valid in a
/// SQL numeric literal.
fn is_plain_decimal(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    let mut seen_dot = false;
    let mut seen_digit = false;

    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}
