//! Row record types for the seed generator
//!
//! This module defines the records read from the author and book CSV files.
//! Each record is deserialized by header name, rendered into a SQL tuple and
//! dropped once the tuple has been written.

use serde::Deserialize;

/// Price used when `books.csv` has no `price` column
pub const DEFAULT_PRICE: &str = "9.99";

/// Description used when `books.csv` has no `description` column
pub const DEFAULT_DESCRIPTION: &str = "A captivating read.";

/// One row of `authors.csv`
///
/// Both columns are required. A header without either of them fails
/// deserialization on the first row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorRecord {
    pub first_name: String,
    pub last_name: String,
}

/// One row of `books.csv`
///
/// `author_id` and `price` are kept as the raw column text. They are written
/// into the SQL verbatim as numeric literals, so no parsing happens here.
///
/// The optional columns fall back to their defaults only when the column is
/// absent from the header. A column that is present but empty for a row
/// yields an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookRecord {
    /// Foreign key into `author`, written unquoted
    pub author_id: String,

    pub title: String,

    /// Decimal price, written unquoted
    #[serde(default = "default_price")]
    pub price: String,

    #[serde(default = "default_description")]
    pub description: String,
}

fn default_price() -> String {
    DEFAULT_PRICE.to_string()
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn read_books(csv_content: &str) -> Vec<BookRecord> {
        csv::Reader::from_reader(csv_content.as_bytes())
            .deserialize()
            .collect::<Result<Vec<BookRecord>, _>>()
            .unwrap()
    }

    #[rstest]
    #[case::both_absent(
        "author_id,title\n3,Go Fast\n",
        DEFAULT_PRICE,
        DEFAULT_DESCRIPTION
    )]
    #[case::price_absent(
        "author_id,title,description\n3,Go Fast,Quick\n",
        DEFAULT_PRICE,
        "Quick"
    )]
    #[case::description_absent(
        "author_id,title,price\n3,Go Fast,12.50\n",
        "12.50",
        DEFAULT_DESCRIPTION
    )]
    #[case::both_present("author_id,title,price,description\n3,Go Fast,1,Quick\n", "1", "Quick")]
    #[case::present_but_empty("author_id,title,price,description\n3,Go Fast,,\n", "", "")]
    fn test_book_defaults_apply_only_to_absent_columns(
        #[case] csv_content: &str,
        #[case] expected_price: &str,
        #[case] expected_description: &str,
    ) {
        let books = read_books(csv_content);
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].author_id, "3");
        assert_eq!(books[0].title, "Go Fast");
        assert_eq!(books[0].price, expected_price);
        assert_eq!(books[0].description, expected_description);
    }

    #[test]
    fn test_book_columns_matched_by_name_not_position() {
        let books = read_books("description,price,title,author_id\nQuick,5,Go Fast,7\n");
        assert_eq!(
            books[0],
            BookRecord {
                author_id: "7".to_string(),
                title: "Go Fast".to_string(),
                price: "5".to_string(),
                description: "Quick".to_string(),
            }
        );
    }

    #[test]
    fn test_author_missing_required_column_fails() {
        let result = csv::Reader::from_reader("first_name\nJohn\n".as_bytes())
            .deserialize::<AuthorRecord>()
            .next()
            .unwrap();
        assert!(result.unwrap_err().to_string().contains("last_name"));
    }
}
