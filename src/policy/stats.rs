//! Hit/miss accounting shared by every policy.

use std::fmt;

use crate::policy::AccessResult;

/// Counters kept by each policy instance.
///
/// These are the only state all five policies have in common. Plain
/// integers: a policy is owned by exactly one driver and cloned for history,
/// so there is nothing to synchronise.
///
/// Only terminal outcomes are counted. A CLOCK `Step` leaves every counter
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyStats {
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl PolicyStats {
    /// Create a new tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one `access` result.
    pub fn record(&mut self, result: &AccessResult) {
        if result.is_hit() {
            self.hits += 1;
        } else if result.is_miss() {
            self.misses += 1;
            if result.evicted.is_some() {
                self.evictions += 1;
            }
        }
    }

    /// Get a copy of the current counters for display.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }
}

/// A point-in-time copy of policy statistics.
///
/// # Example
/// ```
/// use pagingsim::policy::{EvictionPolicy, FifoPolicy};
/// use pagingsim::PageId;
///
/// let mut fifo = FifoPolicy::new(2).unwrap();
/// fifo.access(PageId::new(1));
/// fifo.access(PageId::new(1));
///
/// let stats = fifo.stats();
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.miss_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl StatsSnapshot {
    /// Number of resolved requests.
    #[inline]
    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit rate (0.0 to 1.0). Zero before any request.
    pub fn hit_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Miss rate (0.0 to 1.0). Zero before any request.
    pub fn miss_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.misses as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, evictions: {}, miss_rate: {:.1}% }}",
            self.hits,
            self.misses,
            self.evictions,
            self.miss_rate() * 100.0
        )
    }
}
