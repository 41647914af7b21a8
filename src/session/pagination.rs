//! Pagination state machine
//!
//! After each emitted record the controller decides what happens next:
//! keep going, stop because the page budget is spent, or stop because the
//! series has no further page. Traversal is strictly linear; there is no
//! retry and no back-navigation, and a failed advance is read as the true
//! end of the dataset.

use crate::config::Locator;
use crate::driver::{AdvanceError, PageDriver};
use std::fmt;

/// Outcome of one advance decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// The next page is loaded; the loop continues
    Continuing,

    /// The configured page limit has been reached
    Stopped,

    /// No further page is reachable; expected end of the dataset
    Exhausted,
}

impl Traversal {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Continuing)
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Continuing => "continuing",
            Self::Stopped => "stopped",
            Self::Exhausted => "exhausted",
        };
        write!(f, "{s}")
    }
}

/// Counts visited pages and drives the advance-or-stop decision
#[derive(Debug)]
pub struct PaginationController {
    pages_visited: u32,
    limit: u32,
}

impl PaginationController {
    /// `limit == 0` means unbounded: only exhaustion stops the traversal.
    pub fn new(limit: u32) -> Self {
        Self {
            pages_visited: 0,
            limit,
        }
    }

    pub fn pages_visited(&self) -> u32 {
        self.pages_visited
    }

    /// Records the page just processed and, if the budget allows, advances
    /// to the next one.
    ///
    /// Any failure to activate the next control is the expected terminal
    /// condition, not an error: a run ending in `Exhausted` succeeds.
    pub async fn advance<D: PageDriver>(&mut self, driver: &mut D, next: Locator) -> Traversal {
        self.pages_visited += 1;

        if self.limit > 0 && self.pages_visited >= self.limit {
            tracing::debug!("Page limit of {} reached", self.limit);
            return Traversal::Stopped;
        }

        match driver.activate(next).await {
            Ok(()) => Traversal::Continuing,
            Err(AdvanceError::NoControl(_)) => {
                tracing::info!("No \"next\" link; reached end of scrapable data.");
                Traversal::Exhausted
            }
            Err(e) => {
                tracing::warn!("Could not advance to next page: {}", e);
                Traversal::Exhausted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NEXT_PAGE;
    use crate::driver::mock::{MockDriver, MockPage};

    fn chain(len: usize) -> MockDriver {
        let slugs = ["p1", "p2", "p3", "p4", "p5"];
        let pages = (0..len)
            .map(|i| {
                let page = MockPage::new(slugs[i]);
                if i + 1 < len {
                    page.with_next()
                } else {
                    page
                }
            })
            .collect();
        MockDriver::new(pages)
    }

    #[tokio::test]
    async fn test_limit_one_stops_without_advancing() {
        let mut driver = chain(3);
        let mut controller = PaginationController::new(1);

        assert_eq!(controller.advance(&mut driver, NEXT_PAGE).await, Traversal::Stopped);
        assert_eq!(controller.pages_visited(), 1);
        assert_eq!(driver.activations, 0);
    }

    #[tokio::test]
    async fn test_limit_bounds_a_longer_chain() {
        let mut driver = chain(5);
        let mut controller = PaginationController::new(3);

        assert_eq!(controller.advance(&mut driver, NEXT_PAGE).await, Traversal::Continuing);
        assert_eq!(controller.advance(&mut driver, NEXT_PAGE).await, Traversal::Continuing);
        assert_eq!(controller.advance(&mut driver, NEXT_PAGE).await, Traversal::Stopped);
        assert_eq!(controller.pages_visited(), 3);
        assert_eq!(driver.activations, 2);
    }

    #[tokio::test]
    async fn test_unbounded_runs_until_exhausted() {
        let mut driver = chain(3);
        let mut controller = PaginationController::new(0);

        assert_eq!(controller.advance(&mut driver, NEXT_PAGE).await, Traversal::Continuing);
        assert_eq!(controller.advance(&mut driver, NEXT_PAGE).await, Traversal::Continuing);
        assert_eq!(controller.advance(&mut driver, NEXT_PAGE).await, Traversal::Exhausted);
        assert_eq!(controller.pages_visited(), 3);
    }

    #[tokio::test]
    async fn test_limit_larger_than_chain_ends_exhausted() {
        let mut driver = chain(1);
        let mut controller = PaginationController::new(2);

        assert_eq!(controller.advance(&mut driver, NEXT_PAGE).await, Traversal::Exhausted);
        assert_eq!(controller.pages_visited(), 1);
    }

    #[tokio::test]
    async fn test_failed_activation_is_exhausted_not_error() {
        // Next control present but its target does not load.
        let mut driver = MockDriver::new(vec![MockPage::new("p1").with_next()]);
        let mut controller = PaginationController::new(0);

        assert_eq!(controller.advance(&mut driver, NEXT_PAGE).await, Traversal::Exhausted);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!Traversal::Continuing.is_terminal());
        assert!(Traversal::Stopped.is_terminal());
        assert!(Traversal::Exhausted.is_terminal());
    }
}
