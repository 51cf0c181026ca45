//! A single booklist entry as the UI rendered it

use std::collections::HashMap;
use std::fmt;

use crate::error::{VerifyError, VerifyResult};

/// One extracted table row: column header -> cell text.
pub type RawRow = HashMap<String, String>;

/// Booklist columns, named by their rendered header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Isbn,
    Title,
    Author,
    Year,
    Edition,
    Description,
    Borrower,
    Cover,
}

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::Isbn => "ISBN",
            Column::Title => "Title",
            Column::Author => "Author",
            Column::Year => "Year",
            Column::Edition => "Edition",
            Column::Description => "Description",
            Column::Borrower => "Borrower",
            Column::Cover => "Cover",
        }
    }

    /// Cell text for this column, matching headers case-insensitively.
    fn cell<'a>(&self, raw: &'a RawRow) -> Option<&'a str> {
        let header = self.header();
        raw.get(header).map(String::as_str).or_else(|| {
            raw.iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(header))
                .map(|(_, value)| value.as_str())
        })
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Rendered fields of one catalog entry.
///
/// Every field is kept as the text the page showed. Years and editions are
/// never parsed: leading zeros or locale formatting on screen are exactly
/// the artifacts the acceptance tests guard against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    isbn: String,
    title: String,
    author: String,
    year_of_publication: String,
    edition: String,
    description: String,
    borrower: String,
    cover: String,
}

impl BookRow {
    /// Build a row from extracted cell text.
    ///
    /// The ISBN cell is required and trimmed; table cells pad it. Other
    /// columns may be absent from a given page and then read as empty.
    pub fn from_raw(raw: &RawRow) -> VerifyResult<Self> {
        let isbn = Column::Isbn
            .cell(raw)
            .map(str::trim)
            .filter(|isbn| !isbn.is_empty())
            .ok_or(VerifyError::MalformedRow {
                column: Column::Isbn,
            })?;

        let text = |column: Column| column.cell(raw).unwrap_or_default().to_string();

        Ok(Self {
            isbn: isbn.to_string(),
            title: text(Column::Title),
            author: text(Column::Author),
            year_of_publication: text(Column::Year),
            edition: text(Column::Edition),
            description: text(Column::Description),
            borrower: text(Column::Borrower),
            cover: text(Column::Cover),
        })
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year_of_publication(&self) -> &str {
        &self.year_of_publication
    }

    pub fn edition(&self) -> &str {
        &self.edition
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Empty when nobody borrowed the book.
    pub fn borrower(&self) -> &str {
        &self.borrower
    }

    pub fn cover(&self) -> &str {
        &self.cover
    }

    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Isbn => &self.isbn,
            Column::Title => &self.title,
            Column::Author => &self.author,
            Column::Year => &self.year_of_publication,
            Column::Edition => &self.edition,
            Column::Description => &self.description,
            Column::Borrower => &self.borrower,
            Column::Cover => &self.cover,
        }
    }
}

#[cfg(test)]
pub(crate) fn raw_row(cells: &[(&str, &str)]) -> RawRow {
    cells
        .iter()
        .map(|(header, text)| (header.to_string(), text.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_reads_all_columns() {
        let raw = raw_row(&[
            ("ISBN", "ISBN-1"),
            ("Title", "Tom Sawyer"),
            ("Author", "Mark Twain"),
            ("Year", "1876"),
            ("Edition", "1"),
            ("Description", "The Adventures of Tom Sawyer"),
            ("Borrower", "alice"),
            ("Cover", "/covers/ISBN-1.png"),
        ]);
        let row = BookRow::from_raw(&raw).unwrap();
        assert_eq!(row.isbn(), "ISBN-1");
        assert_eq!(row.title(), "Tom Sawyer");
        assert_eq!(row.author(), "Mark Twain");
        assert_eq!(row.year_of_publication(), "1876");
        assert_eq!(row.edition(), "1");
        assert_eq!(row.description(), "The Adventures of Tom Sawyer");
        assert_eq!(row.borrower(), "alice");
        assert_eq!(row.cover(), "/covers/ISBN-1.png");
    }

    #[test]
    fn test_missing_columns_read_as_empty() {
        let row = BookRow::from_raw(&raw_row(&[("ISBN", "ISBN-1"), ("Title", "T")])).unwrap();
        assert_eq!(row.borrower(), "");
        assert_eq!(row.description(), "");
        assert_eq!(row.field(Column::Cover), "");
    }

    #[test]
    fn test_missing_isbn_is_malformed() {
        let err = BookRow::from_raw(&raw_row(&[("Title", "T")])).unwrap_err();
        assert!(matches!(
            err,
            VerifyError::MalformedRow {
                column: Column::Isbn
            }
        ));
    }

    #[test]
    fn test_blank_isbn_is_malformed() {
        let err = BookRow::from_raw(&raw_row(&[("ISBN", "   ")])).unwrap_err();
        assert!(matches!(err, VerifyError::MalformedRow { .. }));
    }

    #[test]
    fn test_isbn_cell_is_trimmed_other_cells_verbatim() {
        let row =
            BookRow::from_raw(&raw_row(&[("ISBN", " ISBN-1\n"), ("Title", "Tom Sawyer ")])).unwrap();
        assert_eq!(row.isbn(), "ISBN-1");
        assert_eq!(row.title(), "Tom Sawyer ");
    }

    #[test]
    fn test_headers_match_case_insensitively() {
        let row = BookRow::from_raw(&raw_row(&[("isbn", "ISBN-1"), ("BORROWER", "bob")])).unwrap();
        assert_eq!(row.isbn(), "ISBN-1");
        assert_eq!(row.borrower(), "bob");
    }
}
