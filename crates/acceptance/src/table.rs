//! Indexed snapshot of the rendered booklist

use std::collections::HashMap;

use crate::error::{VerifyError, VerifyResult};
use crate::row::{BookRow, RawRow};

/// All rows of one booklist render, keyed by isbn.
///
/// A table is built from a single fetch and never changes afterwards. Steps
/// build a new one every time they look at the page so an assertion never
/// runs against a stale render.
#[derive(Debug, Clone, Default)]
pub struct BookTable {
    rows: Vec<BookRow>,
    by_isbn: HashMap<String, usize>,
}

impl BookTable {
    /// Index rows by isbn, rejecting duplicates.
    pub fn build(rows: Vec<BookRow>) -> VerifyResult<Self> {
        let mut by_isbn = HashMap::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            if by_isbn.insert(row.isbn().to_string(), position).is_some() {
                return Err(VerifyError::DuplicateKey {
                    isbn: row.isbn().to_string(),
                });
            }
        }
        Ok(Self { rows, by_isbn })
    }

    /// Validate and index the raw rows handed back by a renderer.
    pub fn from_raw(raw_rows: &[RawRow]) -> VerifyResult<Self> {
        let rows = raw_rows
            .iter()
            .map(BookRow::from_raw)
            .collect::<VerifyResult<Vec<_>>>()?;
        Self::build(rows)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exact lookup. A missing isbn is an error, never a silent `None`:
    /// callers only ask for books their scenario expects to be listed.
    pub fn book_by_isbn(&self, isbn: &str) -> VerifyResult<&BookRow> {
        self.by_isbn
            .get(isbn)
            .map(|&position| &self.rows[position])
            .ok_or_else(|| VerifyError::RowNotFound {
                isbn: isbn.to_string(),
            })
    }

    /// Rows in render order.
    pub fn rows(&self) -> impl Iterator<Item = &BookRow> {
        self.rows.iter()
    }
}
