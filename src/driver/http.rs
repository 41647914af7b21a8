//! HTTP implementation of the page driver
//!
//! Fetches pages with reqwest and answers locator queries against the
//! parsed document. There is no separate "wait for element" step: an
//! HTTP-fetched document is complete once parsed.

use super::{AdvanceError, DriverError, PageDriver};
use crate::config::Locator;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("fugotcha/", env!("CARGO_PKG_VERSION"));

/// A page driver backed by an HTTP client and an in-memory parsed document
pub struct HttpDriver {
    client: Client,
    location: Url,
    document: Html,
}

impl HttpDriver {
    /// Creates a driver positioned at `start` with nothing loaded yet.
    ///
    /// The first `goto` populates the document.
    pub fn new(start: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            location: start,
            document: Html::parse_document(""),
        })
    }

    fn selector(locator: Locator) -> Option<Selector> {
        match Selector::parse(locator.as_str()) {
            Ok(sel) => Some(sel),
            Err(e) => {
                tracing::warn!("Invalid selector '{}': {:?}", locator, e);
                None
            }
        }
    }

    fn element_text(element: scraper::ElementRef<'_>) -> String {
        element.text().collect::<String>().trim().to_string()
    }
}

impl PageDriver for HttpDriver {
    fn current_url(&self) -> &Url {
        &self.location
    }

    async fn goto(&mut self, url: &Url) -> Result<(), DriverError> {
        tracing::debug!("Loading {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| DriverError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DriverError::LoadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Redirects may have moved us; the slug column is derived from the
        // final location.
        let final_url = response.url().clone();

        let body = response.text().await.map_err(|e| DriverError::Request {
            url: url.to_string(),
            source: e,
        })?;

        tracing::debug!("Received {} bytes from {}", body.len(), final_url);

        self.document = Html::parse_document(&body);
        self.location = final_url;
        Ok(())
    }

    fn query_one(&self, locator: Locator) -> Option<String> {
        let selector = Self::selector(locator)?;
        self.document
            .select(&selector)
            .next()
            .map(Self::element_text)
    }

    fn query_all(&self, locator: Locator) -> Vec<String> {
        let Some(selector) = Self::selector(locator) else {
            return Vec::new();
        };
        self.document
            .select(&selector)
            .map(Self::element_text)
            .collect()
    }

    async fn activate(&mut self, locator: Locator) -> Result<(), AdvanceError> {
        // Resolve the control's target before awaiting; the document borrow
        // must not live across the navigation.
        let href = {
            let selector =
                Self::selector(locator).ok_or(AdvanceError::NoControl(locator))?;
            let element = self
                .document
                .select(&selector)
                .next()
                .ok_or(AdvanceError::NoControl(locator))?;
            element
                .value()
                .attr("href")
                .map(str::to_string)
                .ok_or(AdvanceError::NoTarget(locator))?
        };

        let target = self
            .location
            .join(&href)
            .map_err(|_| AdvanceError::NoTarget(locator))?;

        self.goto(&target).await?;
        Ok(())
    }
}
