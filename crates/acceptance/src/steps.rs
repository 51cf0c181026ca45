//! Booklist and book-details steps
//!
//! Each assertion step navigates to its page and fetches a fresh render
//! before it looks at anything. Nothing read from the page outlives the
//! step that read it.

use tracing::{debug, info};

use crate::catalog::CatalogService;
use crate::compare::{self, BlankPolicy, BookExpectation, BorrowStatus, MatchMode};
use crate::context::ScenarioContext;
use crate::error::{VerifyError, VerifyResult};
use crate::page::{Page, PageElement, PageRenderer};
use crate::row::Column;
use crate::table::BookTable;

pub struct BookListSteps<R, C> {
    renderer: R,
    catalog: C,
    blank_policy: BlankPolicy,
}

impl<R: PageRenderer, C: CatalogService> BookListSteps<R, C> {
    pub fn new(renderer: R, catalog: C) -> Self {
        Self::with_blank_policy(renderer, catalog, BlankPolicy::default())
    }

    pub fn with_blank_policy(renderer: R, catalog: C, blank_policy: BlankPolicy) -> Self {
        Self {
            renderer,
            catalog,
            blank_policy,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// "I browse the list of all books"
    pub fn browse_book_list(&mut self) -> VerifyResult<()> {
        self.renderer.goto(Page::BookList, None)
    }

    /// Navigate to the booklist and index what it renders right now.
    pub fn current_table(&mut self) -> VerifyResult<BookTable> {
        self.renderer.goto(Page::BookList, None)?;
        let raw_rows = self.renderer.fetch_table(PageElement::BookList)?;
        let table = BookTable::from_raw(&raw_rows)?;
        debug!("Booklist renders {} book(s)", table.len());
        Ok(table)
    }

    /// "the booklist contains a book with values ..."
    ///
    /// Exact comparison unless the expectation carries a description.
    pub fn book_list_contains(&mut self, expected: &BookExpectation) -> VerifyResult<()> {
        let table = self.current_table()?;
        debug!(
            "Checking isbn {} in {} mode",
            expected.lookup_key(),
            expected.mode()
        );
        expected.verify(&table)
    }

    /// "The library contains no books"
    pub fn library_is_empty(&mut self) -> VerifyResult<()> {
        let table = self.current_table()?;
        if table.is_empty() {
            Ok(())
        } else {
            Err(VerifyError::NotEmpty { count: table.len() })
        }
    }

    /// "the booklist lists the user X as borrower for the book with isbn Y"
    pub fn lists_borrower(&mut self, borrower: &str, isbn: &str) -> VerifyResult<()> {
        let table = self.current_table()?;
        let row = table.book_by_isbn(isbn)?;
        compare::expect_borrow_status(row, BorrowStatus::Borrowed, borrower, self.blank_policy)
    }

    /// "books X Y are (not) borrowed by borrower Z"
    pub fn books_have_borrow_status<S: AsRef<str>>(
        &mut self,
        isbns: &[S],
        status: BorrowStatus,
        borrower: &str,
    ) -> VerifyResult<()> {
        let table = self.current_table()?;
        compare::expect_borrow_status_all(&table, isbns, status, borrower, self.blank_policy)
    }

    /// "for every book the booklist contains a cover"
    ///
    /// Each cover reference has to mention the isbn of its own row.
    pub fn every_book_has_cover(&mut self) -> VerifyResult<()> {
        let table = self.current_table()?;
        for row in table.rows() {
            compare::expect_field(row, Column::Cover, row.isbn(), MatchMode::Substring)?;
        }
        Ok(())
    }

    /// "I navigate to the detail page of the book with the isbn X"
    pub fn navigate_to_details(
        &mut self,
        isbn: &str,
        context: &mut ScenarioContext,
    ) -> VerifyResult<()> {
        self.renderer.goto(Page::BookDetails, Some(isbn))?;
        context.set_last_browsed_isbn(isbn);
        Ok(())
    }

    /// "I can see all book details for that book"
    ///
    /// Compares the details page against the catalog record of the book
    /// opened earlier in the same scenario.
    pub fn all_details_visible(&mut self, context: &ScenarioContext) -> VerifyResult<()> {
        let isbn = context
            .last_browsed_isbn()
            .ok_or(VerifyError::MissingContext("no book details page was opened"))?;
        let books = self.catalog.find_books_by_isbn(isbn)?;
        let book = books
            .first()
            .ok_or_else(|| VerifyError::NoCatalogRecord(isbn.to_string()))?;

        let year = book.year_of_publication.to_string();
        let expected = [
            book.isbn.as_str(),
            book.author.as_str(),
            book.description.as_str(),
            book.title.as_str(),
            book.edition.as_str(),
            year.as_str(),
        ];
        for text in expected {
            if !self.renderer.contains_text(text)? {
                return Err(VerifyError::TextNotFound(text.to_string()));
            }
        }
        info!("All details of isbn {} visible", isbn);
        Ok(())
    }
}
