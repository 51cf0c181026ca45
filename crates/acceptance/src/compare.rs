//! Field comparison rules used by the booklist steps
//!
//! Two matching modes exist. Exact mode compares character for character.
//! Substring mode only requires the expected text to occur in the rendered
//! cell; it applies when a scenario supplies a description, since
//! descriptions render with surrounding markup and whitespace.
//!
//! Borrow status is a separate check: a book is either not borrowed (blank
//! borrower cell) or borrowed by one specific user.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{VerifyError, VerifyResult};
use crate::row::{BookRow, Column};
use crate::table::BookTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    Substring,
}

impl MatchMode {
    /// Case-sensitive in both modes.
    pub fn matches(&self, expected: &str, actual: &str) -> bool {
        match self {
            MatchMode::Exact => expected == actual,
            MatchMode::Substring => actual.contains(expected),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Exact => write!(f, "exact"),
            MatchMode::Substring => write!(f, "substring"),
        }
    }
}

/// Compare one rendered field against the expected text.
pub fn expect_field(
    row: &BookRow,
    column: Column,
    expected: &str,
    mode: MatchMode,
) -> VerifyResult<()> {
    let actual = row.field(column);
    if mode.matches(expected, actual) {
        Ok(())
    } else {
        Err(VerifyError::FieldMismatch {
            isbn: row.isbn().to_string(),
            column,
            mode,
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// Expected booklist entry, as written in a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookExpectation {
    pub title: String,
    pub author: String,
    pub year: String,
    pub edition: String,
    pub isbn: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl BookExpectation {
    pub fn mode(&self) -> MatchMode {
        if self.description.is_some() {
            MatchMode::Substring
        } else {
            MatchMode::Exact
        }
    }

    /// Key used for the table lookup. Substring mode tolerates padding
    /// around the expected isbn.
    pub fn lookup_key(&self) -> &str {
        match self.mode() {
            MatchMode::Exact => &self.isbn,
            MatchMode::Substring => self.isbn.trim(),
        }
    }

    /// Look the book up and compare every expected field, stopping at the
    /// first mismatch.
    pub fn verify(&self, table: &BookTable) -> VerifyResult<()> {
        let mode = self.mode();
        let row = table.book_by_isbn(self.lookup_key())?;

        expect_field(row, Column::Title, &self.title, mode)?;
        expect_field(row, Column::Author, &self.author, mode)?;
        expect_field(row, Column::Year, &self.year, mode)?;
        expect_field(row, Column::Edition, &self.edition, mode)?;
        expect_field(row, Column::Isbn, self.lookup_key(), mode)?;
        if let Some(description) = &self.description {
            expect_field(row, Column::Description, description, mode)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowStatus {
    NotBorrowed,
    Borrowed,
}

impl BorrowStatus {
    /// Interpret scenario wording such as "not borrowed" or "borrowed".
    pub fn from_phrase(phrase: &str) -> Self {
        if phrase.contains("not borrowed") {
            BorrowStatus::NotBorrowed
        } else {
            BorrowStatus::Borrowed
        }
    }
}

/// What counts as an empty borrower cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BlankPolicy {
    /// Only a cell with no text at all.
    #[default]
    #[serde(alias = "empty-only")]
    #[value(alias = "empty_only")]
    EmptyOnly,
    /// Whitespace-only cells count as empty too.
    #[serde(alias = "trim-whitespace")]
    #[value(alias = "trim_whitespace")]
    TrimWhitespace,
}

impl BlankPolicy {
    pub fn is_blank(&self, text: &str) -> bool {
        match self {
            BlankPolicy::EmptyOnly => text.is_empty(),
            BlankPolicy::TrimWhitespace => text.trim().is_empty(),
        }
    }
}

/// Check the borrower cell of one row.
///
/// `borrower` is ignored for [`BorrowStatus::NotBorrowed`].
pub fn expect_borrow_status(
    row: &BookRow,
    status: BorrowStatus,
    borrower: &str,
    policy: BlankPolicy,
) -> VerifyResult<()> {
    let actual = row.borrower();
    let ok = match status {
        BorrowStatus::NotBorrowed => policy.is_blank(actual),
        BorrowStatus::Borrowed => actual == borrower,
    };
    if ok {
        return Ok(());
    }

    let expected = match status {
        BorrowStatus::NotBorrowed => String::new(),
        BorrowStatus::Borrowed => borrower.to_string(),
    };
    Err(VerifyError::FieldMismatch {
        isbn: row.isbn().to_string(),
        column: Column::Borrower,
        mode: MatchMode::Exact,
        expected,
        actual: actual.to_string(),
    })
}

/// Check the borrow status of several books against one borrower. Fails on
/// the first isbn that is missing or mismatched.
pub fn expect_borrow_status_all<S: AsRef<str>>(
    table: &BookTable,
    isbns: &[S],
    status: BorrowStatus,
    borrower: &str,
    policy: BlankPolicy,
) -> VerifyResult<()> {
    for isbn in isbns {
        let row = table.book_by_isbn(isbn.as_ref())?;
        expect_borrow_status(row, status, borrower, policy)?;
    }
    Ok(())
}

/// Split a space separated isbn list as written in scenario text.
pub fn parse_isbn_list(isbns: &str) -> Vec<String> {
    isbns.split_whitespace().map(str::to_string).collect()
}
