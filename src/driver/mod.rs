//! The page-browsing collaborator
//!
//! The extraction pipeline never touches HTTP or HTML directly; it talks to
//! a `PageDriver`:
//! - `goto` loads a page (non-success status is fatal)
//! - `query_one` / `query_all` read trimmed text by locator
//! - `activate` follows a link-like control (used to advance pagination)
//!
//! `HttpDriver` is the real implementation over reqwest + scraper. A
//! scripted `MockDriver` backs the unit tests.

mod http;

#[cfg(test)]
pub mod mock;

pub use http::HttpDriver;

use crate::config::Locator;
use thiserror::Error;
use url::Url;

/// Navigation failure: the page could not be loaded
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("HTTP {status} for {url}")]
    LoadFailed { url: String, status: u16 },

    #[error("request error for {url}: {source}")]
    Request { url: String, source: reqwest::Error },
}

/// Failure to advance via a page control
///
/// Every variant here means "the traversal cannot continue", which the
/// pagination layer treats as end-of-dataset rather than an error.
#[derive(Debug, Error)]
pub enum AdvanceError {
    #[error("no element matches '{0}'")]
    NoControl(Locator),

    #[error("element '{0}' has no navigation target")]
    NoTarget(Locator),

    #[error("navigation failed: {0}")]
    Navigation(#[from] DriverError),
}

impl From<DriverError> for crate::FugotchaError {
    fn from(e: DriverError) -> Self {
        match e {
            DriverError::LoadFailed { url, status } => {
                crate::FugotchaError::PageLoadFailed { url, status }
            }
            DriverError::Request { url, source } => crate::FugotchaError::Http { url, source },
        }
    }
}

/// A rendered page plus the means to move to another one
///
/// Queries are synchronous: once `goto` returns, the document is fully
/// available. Navigation (`goto`, `activate`) is the only place the
/// pipeline suspends.
///
/// The session runs on one thread and never spawns, so the futures here
/// carry no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait PageDriver {
    /// The location of the currently loaded page.
    fn current_url(&self) -> &Url;

    /// Loads `url`, replacing the current document.
    async fn goto(&mut self, url: &Url) -> Result<(), DriverError>;

    /// Trimmed text of the first element matching `locator`, if any.
    fn query_one(&self, locator: Locator) -> Option<String>;

    /// Trimmed texts of every element matching `locator`, in document order.
    fn query_all(&self, locator: Locator) -> Vec<String>;

    /// Finds the control matching `locator` and follows its target,
    /// replacing the current document on success.
    async fn activate(&mut self, locator: Locator) -> Result<(), AdvanceError>;
}
