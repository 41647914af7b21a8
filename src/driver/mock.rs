//! Scripted driver for unit tests
//!
//! Pages are fixtures keyed by locator string; `activate` walks a linear
//! chain of fixtures, which is exactly the shape of the live series.

use super::{AdvanceError, DriverError, PageDriver};
use crate::config::{Locator, TRACKS};
use std::collections::HashMap;
use url::Url;

#[derive(Debug, Clone, Default)]
pub struct MockPage {
    slug: &'static str,
    texts: HashMap<&'static str, &'static str>,
    lists: HashMap<&'static str, Vec<&'static str>>,
    has_next: bool,
}

impl MockPage {
    pub fn new(slug: &'static str) -> Self {
        Self {
            slug,
            ..Self::default()
        }
    }

    pub fn text(mut self, locator: &'static str, value: &'static str) -> Self {
        self.texts.insert(locator, value);
        self
    }

    pub fn list(mut self, locator: &'static str, values: &[&'static str]) -> Self {
        self.lists.insert(locator, values.to_vec());
        self
    }

    /// Registers the track container plus its entries in one step.
    pub fn tracks(self, names: &[&'static str]) -> Self {
        self.text(TRACKS.container.as_str(), "")
            .list(TRACKS.item.as_str(), names)
    }

    /// Gives the page a working "next" control (pointing at the following
    /// fixture, or at nothing if this is the last one).
    pub fn with_next(mut self) -> Self {
        self.has_next = true;
        self
    }
}

pub struct MockDriver {
    pages: Vec<MockPage>,
    current: usize,
    location: Url,
    pub activations: u32,
}

impl MockDriver {
    pub fn new(pages: Vec<MockPage>) -> Self {
        assert!(!pages.is_empty(), "mock driver needs at least one page");
        let location = Self::url_for(pages[0].slug);
        Self {
            pages,
            current: 0,
            location,
            activations: 0,
        }
    }

    fn url_for(slug: &str) -> Url {
        Url::parse(&format!("https://mock.invalid/series/{slug}")).expect("mock url")
    }

    fn page(&self) -> &MockPage {
        &self.pages[self.current]
    }
}

impl PageDriver for MockDriver {
    fn current_url(&self) -> &Url {
        &self.location
    }

    async fn goto(&mut self, url: &Url) -> Result<(), DriverError> {
        match self.pages.iter().position(|p| &Self::url_for(p.slug) == url) {
            Some(index) => {
                self.current = index;
                self.location = url.clone();
                Ok(())
            }
            None => Err(DriverError::LoadFailed {
                url: url.to_string(),
                status: 404,
            }),
        }
    }

    fn query_one(&self, locator: Locator) -> Option<String> {
        self.page()
            .texts
            .get(locator.as_str())
            .map(|s| s.trim().to_string())
    }

    fn query_all(&self, locator: Locator) -> Vec<String> {
        self.page()
            .lists
            .get(locator.as_str())
            .map(|items| items.iter().map(|s| s.trim().to_string()).collect())
            .unwrap_or_default()
    }

    async fn activate(&mut self, locator: Locator) -> Result<(), AdvanceError> {
        if !self.page().has_next {
            return Err(AdvanceError::NoControl(locator));
        }
        self.activations += 1;

        let next = self.current + 1;
        match self.pages.get(next) {
            Some(page) => {
                self.location = Self::url_for(page.slug);
                self.current = next;
                Ok(())
            }
            // A next control pointing past the end of the fixtures behaves
            // like a dead link.
            None => Err(AdvanceError::Navigation(DriverError::LoadFailed {
                url: "https://mock.invalid/series/missing".to_string(),
                status: 404,
            })),
        }
    }
}
