//! Scrape session orchestration
//!
//! One session drives the whole run: load the start page, then for each
//! page extract every configured field (track list last), assemble the
//! record, emit it through the sink, and ask the pagination controller
//! whether to continue. Strictly one page at a time; the only suspension
//! points are navigation.

mod pagination;

pub use pagination::{PaginationController, Traversal};

use crate::config::{self, SessionConfig};
use crate::driver::PageDriver;
use crate::output::RecordSink;
use crate::record::Record;
use crate::{extract, record, Result};

/// What a finished run looked like, for operator reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub pages_scraped: u32,
    pub outcome: Traversal,
}

/// A single scrape run over one driver
///
/// Consumed by `run`; a fresh session must be created to scrape again.
pub struct ScrapeSession<D: PageDriver> {
    config: SessionConfig,
    driver: D,
    controller: PaginationController,
}

impl<D: PageDriver> ScrapeSession<D> {
    pub fn new(config: SessionConfig, driver: D) -> Self {
        let controller = PaginationController::new(config.page_limit);
        Self {
            config,
            driver,
            controller,
        }
    }

    /// Runs the session to completion, emitting records through `sink`.
    ///
    /// A missing required field or a failed page load aborts the whole run;
    /// records already emitted remain valid output. Exhausting the series
    /// is a normal way to finish.
    pub async fn run<S: RecordSink>(mut self, sink: &mut S) -> Result<SessionSummary> {
        if self.config.write_header {
            sink.write_header(&config::header_labels())?;
        }

        let start = self.config.start_url()?;
        tracing::info!("Starting scrape at {}", start);
        self.driver.goto(&start).await?;

        let outcome = loop {
            let record = self.scrape_page()?;
            sink.write_record(&record)?;
            tracing::info!(
                "Scraped page {} ({} columns)",
                extract::page_slug(self.driver.current_url()),
                record.len()
            );

            match self.controller.advance(&mut self.driver, config::NEXT_PAGE).await {
                Traversal::Continuing => continue,
                terminal => break terminal,
            }
        };

        let summary = SessionSummary {
            pages_scraped: self.controller.pages_visited(),
            outcome,
        };
        tracing::info!(
            "Session finished: {} page(s) scraped, traversal {}",
            summary.pages_scraped,
            summary.outcome
        );
        Ok(summary)
    }

    /// Extracts one full record from the current page: fixed fields in
    /// schema order first, the track list last.
    fn scrape_page(&self) -> Result<Record> {
        let slug = extract::page_slug(self.driver.current_url());

        let mut fields = Vec::with_capacity(config::FIELD_SCHEMA.len());
        for descriptor in config::FIELD_SCHEMA {
            fields.push(extract::extract(&self.driver, descriptor)?);
        }

        let tracks = extract::extract_all(&self.driver, &config::TRACKS)?;

        Ok(record::build(slug, fields, tracks))
    }
}
