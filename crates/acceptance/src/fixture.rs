//! Replay of recorded page renders
//!
//! A snapshot file captures what the application rendered for each page:
//!
//! ```yaml
//! pages:
//!   book_list:
//!     tables:
//!       book_list:
//!         - { ISBN: "0123456789", Title: Sourcecode, Borrower: "" }
//! details:
//!   "0123456789":
//!     text: ["Sourcecode", "Author of Code"]
//! ```
//!
//! `details` holds book details pages keyed by the isbn parameter.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{VerifyError, VerifyResult};
use crate::page::{Page, PageElement, PageRenderer};
use crate::row::RawRow;

/// One rendered page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub tables: HashMap<PageElement, Vec<RawRow>>,

    /// Free text shown on the page outside of tables.
    #[serde(default)]
    pub text: Vec<String>,
}

impl PageSnapshot {
    fn contains_text(&self, needle: &str) -> bool {
        self.text.iter().any(|line| line.contains(needle))
            || self
                .tables
                .values()
                .flatten()
                .flat_map(|row| row.values())
                .any(|cell| cell.contains(needle))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub pages: HashMap<Page, PageSnapshot>,

    #[serde(default)]
    pub details: HashMap<String, PageSnapshot>,
}

impl Snapshot {
    pub fn from_yaml(yaml: &str) -> VerifyResult<Self> {
        serde_yaml::from_str(yaml).map_err(VerifyError::from)
    }

    pub fn from_file(path: &Path) -> VerifyResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

/// [`PageRenderer`] serving pages out of a [`Snapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotRenderer {
    snapshot: Snapshot,
    current: Option<(Page, Option<String>)>,
    history: Vec<String>,
}

impl SnapshotRenderer {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            current: None,
            history: Vec::new(),
        }
    }

    pub fn from_file(path: &Path) -> VerifyResult<Self> {
        Ok(Self::new(Snapshot::from_file(path)?))
    }

    /// Urls visited so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn resolve(&self, page: Page, parameter: Option<&str>) -> Option<&PageSnapshot> {
        match (page, parameter) {
            (Page::BookDetails, Some(isbn)) => self.snapshot.details.get(isbn),
            _ => self.snapshot.pages.get(&page),
        }
    }

    fn current_page(&self) -> VerifyResult<&PageSnapshot> {
        let (page, parameter) = self
            .current
            .as_ref()
            .ok_or_else(|| VerifyError::Renderer("no page loaded".to_string()))?;
        self.resolve(*page, parameter.as_deref())
            .ok_or_else(|| VerifyError::Renderer(format!("page {} not recorded", page)))
    }
}

impl PageRenderer for SnapshotRenderer {
    fn goto(&mut self, page: Page, parameter: Option<&str>) -> VerifyResult<()> {
        let url = page.url(parameter);
        if self.resolve(page, parameter).is_none() {
            return Err(VerifyError::Renderer(format!("no recorded render for {}", url)));
        }
        debug!("Replaying {}", url);
        self.history.push(url);
        self.current = Some((page, parameter.map(str::to_string)));
        Ok(())
    }

    fn fetch_table(&mut self, element: PageElement) -> VerifyResult<Vec<RawRow>> {
        let page = self.current_page()?;
        page.tables.get(&element).cloned().ok_or_else(|| {
            VerifyError::Renderer(format!(
                "table #{} not present on the current page",
                element.element_id()
            ))
        })
    }

    fn contains_text(&mut self, text: &str) -> VerifyResult<bool> {
        Ok(self.current_page()?.contains_text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"
pages:
  book_list:
    tables:
      book_list:
        - ISBN: "ISBN-1"
          Title: "Tom Sawyer"
          Borrower: ""
  insert_books:
    text: ["Insert a book"]
details:
  "ISBN-1":
    text: ["Tom Sawyer", "Mark Twain"]
"#;

    fn renderer() -> SnapshotRenderer {
        SnapshotRenderer::new(Snapshot::from_yaml(SNAPSHOT).unwrap())
    }

    #[test]
    fn test_fetch_requires_a_page() {
        let mut renderer = renderer();
        assert!(matches!(
            renderer.fetch_table(PageElement::BookList),
            Err(VerifyError::Renderer(_))
        ));
    }

    #[test]
    fn test_fetch_booklist_rows() {
        let mut renderer = renderer();
        renderer.goto(Page::BookList, None).unwrap();
        let rows = renderer.fetch_table(PageElement::BookList).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Title"], "Tom Sawyer");
        assert!(renderer.contains_text("Sawyer").unwrap());
    }

    #[test]
    fn test_page_without_table() {
        let mut renderer = renderer();
        renderer.goto(Page::InsertBooks, None).unwrap();
        assert!(renderer.fetch_table(PageElement::BookList).is_err());
        assert!(renderer.contains_text("Insert").unwrap());
    }

    #[test]
    fn test_details_resolve_by_isbn() {
        let mut renderer = renderer();
        renderer.goto(Page::BookDetails, Some("ISBN-1")).unwrap();
        assert!(renderer.contains_text("Mark Twain").unwrap());
        assert!(renderer.goto(Page::BookDetails, Some("ISBN-2")).is_err());
        assert_eq!(renderer.history(), ["bookDetails?isbn=ISBN-1"]);
    }

    #[test]
    fn test_unrecorded_page_is_rejected() {
        let mut renderer = renderer();
        assert!(matches!(
            renderer.goto(Page::BorrowBook, None),
            Err(VerifyError::Renderer(_))
        ));
    }
}
