//! Session configuration
//!
//! Everything the scraper needs to know up front lives here:
//! - The base URL of the Fugazi Live Series catalog
//! - The fixed field schema for a release page (see `schema`)
//! - CLI input validation (see `validation`)
//!
//! There is no module-level mutable state: a `SessionConfig` is built once
//! in `main` and handed to the session.

pub mod schema;
pub mod validation;

pub use schema::{
    header_labels, FieldDescriptor, Locator, Presence, TrackSchema, FIELD_SCHEMA, NEXT_PAGE,
    PAGE_SLUG_LABEL, TRACKS,
};

use crate::output::CsvFormat;
use crate::{FugotchaError, Result};
use url::Url;

/// Where the Fugazi Live Series lives on dischord.com
pub const DEFAULT_BASE_URL: &str = "https://www.dischord.com/fugazi_live_series";

/// Configuration for a single scrape session
///
/// A session is not restartable; a fresh `SessionConfig` + session pair is
/// created for every run.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL the start slug is appended to
    pub base_url: Url,

    /// Normalized slug of the first page to visit
    pub slug: String,

    /// Maximum number of pages to scrape; 0 means "until the series ends"
    pub page_limit: u32,

    /// Delimiter and quote characters for the emitted CSV
    pub csv: CsvFormat,

    /// Whether to emit the header row before the first record
    pub write_header: bool,
}

impl SessionConfig {
    /// Creates a session configuration with the default CSV format and a
    /// header row enabled.
    pub fn new(base_url: Url, slug: String, page_limit: u32) -> Self {
        Self {
            base_url,
            slug,
            page_limit,
            csv: CsvFormat::default(),
            write_header: true,
        }
    }

    /// Resolves the full URL of the first page to visit.
    pub fn start_url(&self) -> Result<Url> {
        let joined = format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), self.slug);
        Url::parse(&joined)
            .map_err(|e| FugotchaError::Validation(format!("Invalid start URL '{}': {}", joined, e)))
    }
}
