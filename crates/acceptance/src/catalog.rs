//! Catalog service contract and canonical book records

use serde::{Deserialize, Serialize};

use crate::error::VerifyResult;

/// A book as the catalog service stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub edition: String,
    pub isbn: String,
    pub year_of_publication: i32,
    #[serde(default)]
    pub description: String,
}

/// Record every demo scenario inserts before borrowing.
pub fn demo_book() -> Book {
    Book {
        title: "Sourcecode".to_string(),
        author: "Author of Code".to_string(),
        edition: "1".to_string(),
        isbn: "0123456789".to_string(),
        year_of_publication: 2016,
        description: "A book about code".to_string(),
    }
}

/// Lookup of canonical records, used where a scenario names a book only by
/// its isbn.
pub trait CatalogService {
    fn find_books_by_isbn(&self, isbn: &str) -> VerifyResult<Vec<Book>>;
}

/// Catalog backed by a fixed list of books.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryCatalog {
    books: Vec<Book>,
}

impl InMemoryCatalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl CatalogService for InMemoryCatalog {
    fn find_books_by_isbn(&self, isbn: &str) -> VerifyResult<Vec<Book>> {
        Ok(self
            .books
            .iter()
            .filter(|book| book.isbn == isbn)
            .cloned()
            .collect())
    }
}
