//! Error types for booklist verification

use thiserror::Error;

use crate::compare::MatchMode;
use crate::row::Column;

#[derive(Error, Debug)]
pub enum VerifyError {
    /// A rendered row came without its key cell. Points at a markup
    /// regression, not at catalog content.
    #[error("Malformed row: missing or blank {column} cell")]
    MalformedRow { column: Column },

    #[error("Duplicate key: isbn {isbn} rendered more than once")]
    DuplicateKey { isbn: String },

    #[error("Row not found: no book with isbn {isbn:?} in the booklist")]
    RowNotFound { isbn: String },

    #[error("Field mismatch for isbn {isbn}: {column} ({mode}) expected {expected:?}, got {actual:?}")]
    FieldMismatch {
        isbn: String,
        column: Column,
        mode: MatchMode,
        expected: String,
        actual: String,
    },

    #[error("Booklist not empty: {count} book(s) rendered")]
    NotEmpty { count: usize },

    #[error("Text not found on page: {0:?}")]
    TextNotFound(String),

    #[error("No catalog record for isbn {0}")]
    NoCatalogRecord(String),

    #[error("Missing scenario context: {0}")]
    MissingContext(&'static str),

    #[error("Renderer error: {0}")]
    Renderer(String),

    #[error("Scenario parse error: {0}")]
    ScenarioParse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type VerifyResult<T> = Result<T, VerifyError>;
