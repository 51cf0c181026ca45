//! Declarative YAML scenarios

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::compare::{parse_isbn_list, BookExpectation};
use crate::error::{VerifyError, VerifyResult};

/// A scenario parsed from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    /// Unique name for this scenario
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Tags for filtering scenarios
    #[serde(default)]
    pub tags: Vec<String>,

    /// Steps to execute in order
    pub steps: Vec<ScenarioStep>,
}

/// A single step in a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Open the booklist page
    BrowseBookList,

    /// The booklist shows a book with these values
    ExpectBook(BookExpectation),

    /// The booklist shows no books at all
    ExpectEmpty,

    /// A user is listed as borrower of one book
    ExpectBorrower { borrower: String, isbn: String },

    /// Several books share one borrow status
    ExpectBorrowStatus {
        isbns: IsbnList,
        /// Wording such as "borrowed" or "not borrowed"
        status: String,
        #[serde(default)]
        borrower: String,
    },

    /// Every cover references the isbn of its own row
    ExpectCovers,

    /// Open the details page of a book
    OpenDetails { isbn: String },

    /// The opened details page shows every catalog field of its book
    ExpectDetailsVisible,

    /// Log a message (for debugging)
    Log { message: String },
}

/// Isbns either as a YAML list or as space separated text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IsbnList {
    List(Vec<String>),
    Text(String),
}

impl IsbnList {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            IsbnList::List(isbns) => isbns.clone(),
            IsbnList::Text(text) => parse_isbn_list(text),
        }
    }
}

impl ScenarioStep {
    /// Short label used in results and logs
    pub fn name(&self) -> String {
        match self {
            ScenarioStep::BrowseBookList => "browse_book_list".to_string(),
            ScenarioStep::ExpectBook(expected) => format!("expect_book:{}", expected.isbn),
            ScenarioStep::ExpectEmpty => "expect_empty".to_string(),
            ScenarioStep::ExpectBorrower { isbn, .. } => format!("expect_borrower:{}", isbn),
            ScenarioStep::ExpectBorrowStatus { isbns, status, .. } => {
                format!("expect_borrow_status:{}:{}", status, isbns.to_vec().join(","))
            }
            ScenarioStep::ExpectCovers => "expect_covers".to_string(),
            ScenarioStep::OpenDetails { isbn } => format!("open_details:{}", isbn),
            ScenarioStep::ExpectDetailsVisible => "expect_details_visible".to_string(),
            ScenarioStep::Log { message } => {
                format!("log:{}", message.chars().take(30).collect::<String>())
            }
        }
    }
}

impl ScenarioSpec {
    /// Parse a scenario from YAML string
    pub fn from_yaml(yaml: &str) -> VerifyResult<Self> {
        serde_yaml::from_str(yaml).map_err(VerifyError::from)
    }

    /// Parse a scenario from a YAML file
    pub fn from_file(path: &Path) -> VerifyResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
            .map_err(|e| VerifyError::ScenarioParse(format!("{}: {}", path.display(), e)))
    }

    /// Load all scenarios from a directory, sorted by file path
    pub fn load_all(dir: &Path) -> VerifyResult<Vec<Self>> {
        let mut paths: Vec<_> = walkdir::WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
            .map(|e| e.into_path())
            .collect();
        paths.sort();

        paths.iter().map(|path| Self::from_file(path)).collect()
    }

    /// Filter scenarios by tag
    pub fn filter_by_tag<'a>(specs: &'a [Self], tag: &str) -> Vec<&'a Self> {
        specs.iter().filter(|s| s.tags.iter().any(|t| t == tag)).collect()
    }
}
