//! Fugotcha: a command-line scraper for the Fugazi Live Series
//!
//! This crate extracts release metadata (track lists, release identifiers,
//! venue/date/credits fields) from the Fugazi Live Series catalog on
//! dischord.com, following "next page" links until a configured page count
//! or the end of the series is reached, and writes one CSV record per page.

pub mod config;
pub mod driver;
pub mod extract;
pub mod output;
pub mod record;
pub mod session;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fugotcha operations
///
/// Reaching the end of the series (no "next" link) is not represented here:
/// that is the expected `Traversal::Exhausted` outcome, not a failure.
#[derive(Debug, Error)]
pub enum FugotchaError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Page load failed for {url}: HTTP {status}")]
    PageLoadFailed { url: String, status: u16 },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Required field '{field}' not found on {url}")]
    MissingRequiredField { field: String, url: String },

    #[error("Output destination already exists: {}", path.display())]
    OutputConflict { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fugotcha operations
pub type Result<T> = std::result::Result<T, FugotchaError>;

// Re-export commonly used types
pub use config::{FieldDescriptor, Locator, Presence, SessionConfig};
pub use driver::{DriverError, HttpDriver, PageDriver};
pub use record::Record;
pub use session::{PaginationController, ScrapeSession, SessionSummary, Traversal};
