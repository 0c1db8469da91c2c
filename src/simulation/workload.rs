//! Random request sequences.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::config::{DEFAULT_PAGE_RANGE, DEFAULT_REQUEST_COUNT};
use crate::common::{Error, PageId, Result};

/// Draws page requests uniformly from an inclusive range of page ids.
///
/// # Example
/// ```
/// use pagingsim::simulation::RequestGenerator;
///
/// let mut gen = RequestGenerator::with_seed(7, 1..=10).unwrap();
/// let requests = gen.generate(15);
/// assert_eq!(requests.len(), 15);
/// assert!(requests.iter().all(|p| (1..=10).contains(&p.0)));
/// ```
#[derive(Debug, Clone)]
pub struct RequestGenerator<R = StdRng> {
    rng: R,
    page_range: RangeInclusive<u32>,
}

impl RequestGenerator<StdRng> {
    /// Reproducible generator: the same seed yields the same sequence.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` if `page_range` is empty
    pub fn with_seed(seed: u64, page_range: RangeInclusive<u32>) -> Result<Self> {
        Self::from_rng(StdRng::seed_from_u64(seed), page_range)
    }

    /// Generator seeded from the operating system.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` if `page_range` is empty
    pub fn from_entropy(page_range: RangeInclusive<u32>) -> Result<Self> {
        Self::from_rng(StdRng::from_entropy(), page_range)
    }
}

impl<R: Rng> RequestGenerator<R> {
    /// Wrap an existing RNG.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` if `page_range` is empty
    pub fn from_rng(rng: R, page_range: RangeInclusive<u32>) -> Result<Self> {
        if page_range.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "page range {}..={} is empty",
                page_range.start(),
                page_range.end()
            )));
        }
        Ok(Self { rng, page_range })
    }

    pub fn page_range(&self) -> &RangeInclusive<u32> {
        &self.page_range
    }

    /// Draw one page.
    pub fn next_page(&mut self) -> PageId {
        PageId::new(self.rng.gen_range(self.page_range.clone()))
    }

    /// Draw `count` pages.
    pub fn generate(&mut self, count: usize) -> Vec<PageId> {
        (0..count).map(|_| self.next_page()).collect()
    }

    /// Draw the default workload: 15 requests.
    pub fn generate_default(&mut self) -> Vec<PageId> {
        self.generate(DEFAULT_REQUEST_COUNT)
    }
}

impl Default for RequestGenerator<StdRng> {
    fn default() -> Self {
        Self::from_entropy(DEFAULT_PAGE_RANGE).expect("default page range is non-empty")
    }
}
