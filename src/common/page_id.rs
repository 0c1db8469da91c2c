//! Page identifier type.

use std::fmt;

/// Identifies a page requested by the simulated CPU.
///
/// Pages are opaque tokens: the simulator only compares and hashes them, it
/// never translates them to addresses. The reference workload uses small
/// positive integers (1..=10).
///
/// # Example
/// ```
/// use pagingsim::PageId;
///
/// let page = PageId::new(7);
/// assert_eq!(page.0, 7);
/// assert_eq!(page.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    #[inline]
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a slice of raw numbers into a request sequence.
///
/// ```
/// use pagingsim::common::pages;
///
/// let requests = pages(&[1, 2, 3]);
/// assert_eq!(requests.len(), 3);
/// ```
pub fn pages(ids: &[u32]) -> Vec<PageId> {
    ids.iter().copied().map(PageId::new).collect()
}
