//! SQL literal and statement rendering
//!
//! All functions are pure (no I/O) for easy testing.

/// Escape single quotes by doubling them
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

/// Escape and wrap a value in single quotes
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", escape_sql_string(value))
}

/// Render one multi-row INSERT statement
///
/// The statement has the form
///
/// ```text
/// INSERT INTO <table> (<col>, <col>) VALUES
/// <tuple>,
/// <tuple>;
///
/// ```
///
/// and always ends with a blank line. Callers never pass an empty batch.
pub fn render_insert(table: &str, columns: &[&str], tuples: &[String]) -> String {
    format!(
        "INSERT INTO {} ({}) VALUES\n{};\n\n",
        table,
        columns.join(", "),
        tuples.join(",\n")
    )
}
