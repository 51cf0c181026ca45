//! Worblehat booklist acceptance verifier
//!
//! Acceptance scenarios for the Worblehat library catalog check what the
//! web UI renders against expected book records. This crate holds the part
//! of that harness with real logic: indexing the rendered booklist by isbn
//! and comparing rows field by field.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Scenario runner (YAML specs)                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  BookListSteps                                              │
//! │    ├── PageRenderer::goto / fetch_table / contains_text     │
//! │    ├── CatalogService::find_books_by_isbn                   │
//! │    └── ScenarioContext (per scenario, explicit)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  compare: MatchMode, BookExpectation, BorrowStatus          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  BookTable  (isbn -> BookRow, built per step)               │
//! │  BookRow    (validated from one RawRow)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The browser driver and the catalog backend are external; they plug in
//! through [`PageRenderer`] and [`CatalogService`]. [`SnapshotRenderer`]
//! replays recorded renders for offline runs.

pub mod catalog;
pub mod compare;
pub mod config;
pub mod context;
pub mod error;
pub mod fixture;
pub mod page;
pub mod row;
pub mod runner;
pub mod scenario;
pub mod steps;
pub mod table;

pub use catalog::{demo_book, Book, CatalogService, InMemoryCatalog};
pub use compare::{BlankPolicy, BookExpectation, BorrowStatus, MatchMode};
pub use config::HarnessConfig;
pub use context::ScenarioContext;
pub use error::{VerifyError, VerifyResult};
pub use fixture::{Snapshot, SnapshotRenderer};
pub use page::{Page, PageElement, PageRenderer};
pub use row::{BookRow, Column, RawRow};
pub use runner::ScenarioRunner;
pub use scenario::{ScenarioSpec, ScenarioStep};
pub use steps::BookListSteps;
pub use table::BookTable;
