//! Page renderer contract
//!
//! The browser driver lives outside this crate. Steps only need to move
//! between pages, read back the rendered booklist and search the page for
//! text; anything that can do that implements [`PageRenderer`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VerifyResult;
use crate::row::RawRow;

/// Pages of the Worblehat web application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    BookList,
    BookDetails,
    InsertBooks,
    BorrowBook,
    ReturnAllBooks,
}

impl Page {
    /// Path relative to the application root.
    pub fn path(&self) -> &'static str {
        match self {
            Page::BookList => "bookList",
            Page::BookDetails => "bookDetails",
            Page::InsertBooks => "insertBooks",
            Page::BorrowBook => "borrow",
            Page::ReturnAllBooks => "returnAllBooks",
        }
    }

    /// Path with the optional query parameter applied. Only the details page
    /// takes one, the isbn of the book to show.
    pub fn url(&self, parameter: Option<&str>) -> String {
        match parameter {
            Some(value) => format!("{}?isbn={}", self.path(), value),
            None => self.path().to_string(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Tables the steps read from a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageElement {
    BookList,
}

impl PageElement {
    /// DOM id of the element.
    pub fn element_id(&self) -> &'static str {
        match self {
            PageElement::BookList => "bookList",
        }
    }
}

/// Synchronous access to whatever renders the application.
///
/// `fetch_table` must return the fully rendered table of the current page,
/// one [`RawRow`] per row. Waiting and retrying are the implementor's job.
pub trait PageRenderer {
    fn goto(&mut self, page: Page, parameter: Option<&str>) -> VerifyResult<()>;

    fn fetch_table(&mut self, element: PageElement) -> VerifyResult<Vec<RawRow>>;

    fn contains_text(&mut self, text: &str) -> VerifyResult<bool>;
}
