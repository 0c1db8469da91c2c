//! LFU (Least-Frequently-Used) replacement policy.

use std::collections::HashMap;

use log::{debug, trace};

use crate::common::{PageId, Result};
use crate::policy::{
    check_capacity, AccessResult, CacheState, EvictionPolicy, FrequencyEntry, PolicyKind,
    PolicyStats, StatsSnapshot,
};

/// Per-page bookkeeping for LFU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LfuEntry {
    /// Requests for this page since it was loaded.
    frequency: u64,

    /// Logical time the page was loaded. Never changes on a hit.
    loaded_at: u64,
}

/// Evicts the page with the lowest request count.
///
/// # Tie-break
/// Among pages with the same count, the one loaded earliest goes first.
/// Load times come from a logical clock that ticks on every access, so no
/// two residents share one and the victim is always unique.
#[derive(Debug, Clone)]
pub struct LfuPolicy {
    capacity: usize,
    entries: HashMap<PageId, LfuEntry>,

    /// Logical clock, incremented on every access (hit or miss).
    clock: u64,

    stats: PolicyStats,
}

impl LfuPolicy {
    /// Create an empty LFU cache.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        Ok(Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            clock: 0,
            stats: PolicyStats::new(),
        })
    }

    /// Request count of a resident page.
    pub fn frequency(&self, page: PageId) -> Option<u64> {
        self.entries.get(&page).map(|e| e.frequency)
    }

    /// Current value of the logical clock.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Minimum frequency first, then earliest load.
    fn victim(&self) -> Option<PageId> {
        self.entries
            .iter()
            .min_by_key(|(_, e)| (e.frequency, e.loaded_at))
            .map(|(&page, _)| page)
    }
}

impl EvictionPolicy for LfuPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lfu
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.entries.contains_key(&page)
    }

    fn access(&mut self, page: PageId) -> AccessResult {
        self.clock += 1;

        if let Some(entry) = self.entries.get_mut(&page) {
            entry.frequency += 1;
            trace!("lfu: hit {} (frequency {})", page, entry.frequency);

            let result = AccessResult::hit();
            self.stats.record(&result);
            return result;
        }

        let mut evicted = None;
        if self.entries.len() >= self.capacity {
            evicted = self.victim();
            if let Some(victim) = evicted {
                self.entries.remove(&victim);
                debug!("lfu: evict {} for {}", victim, page);
            }
        }

        self.entries.insert(
            page,
            LfuEntry {
                frequency: 1,
                loaded_at: self.clock,
            },
        );

        let result = AccessResult::miss(evicted);
        self.stats.record(&result);
        result
    }

    /// Residents with their counts, in load order.
    fn cache_state(&self) -> CacheState {
        let mut entries: Vec<(PageId, LfuEntry)> =
            self.entries.iter().map(|(&p, &e)| (p, e)).collect();
        entries.sort_by_key(|(_, e)| e.loaded_at);

        CacheState::Frequency(
            entries
                .into_iter()
                .map(|(page, e)| FrequencyEntry {
                    page,
                    frequency: e.frequency,
                })
                .collect(),
        )
    }

    fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    fn entry(page: u32, frequency: u64) -> FrequencyEntry {
        FrequencyEntry {
            page: PageId::new(page),
            frequency,
        }
    }

    #[test]
    fn test_lfu_tie_break_oldest_first() {
        let mut lfu = LfuPolicy::new(3).unwrap();
        for page in pages(&[1, 2, 3, 1]) {
            lfu.access(page);
        }

        assert_eq!(lfu.frequency(PageId::new(1)), Some(2));
        assert_eq!(lfu.frequency(PageId::new(2)), Some(1));
        assert_eq!(lfu.frequency(PageId::new(3)), Some(1));

        // 2 and 3 are tied at 1; 2 was loaded first
        assert_eq!(lfu.access(PageId::new(4)).evicted, Some(PageId::new(2)));
        assert_eq!(
            lfu.cache_state(),
            CacheState::Frequency(vec![entry(1, 2), entry(3, 1), entry(4, 1)])
        );
    }

    #[test]
    fn test_lfu_frequency_beats_age() {
        let mut lfu = LfuPolicy::new(2).unwrap();
        for page in pages(&[1, 1, 1, 2, 2]) {
            lfu.access(page);
        }
        // 1 has 3 requests, 2 has 2: 2 goes even though it is newer
        assert_eq!(lfu.access(PageId::new(3)).evicted, Some(PageId::new(2)));
    }

    #[test]
    fn test_lfu_reload_resets_frequency() {
        let mut lfu = LfuPolicy::new(1).unwrap();
        for page in pages(&[1, 1, 1, 2, 1]) {
            lfu.access(page);
        }
        assert_eq!(lfu.frequency(PageId::new(1)), Some(1));
        assert_eq!(lfu.frequency(PageId::new(2)), None);
    }

    #[test]
    fn test_lfu_clock_ticks_on_hits_and_misses() {
        let mut lfu = LfuPolicy::new(2).unwrap();
        for page in pages(&[1, 1, 2]) {
            lfu.access(page);
        }
        assert_eq!(lfu.clock(), 3);

        // The hit on 1 did not refresh its load time
        assert_eq!(lfu.cache_state().pages(), pages(&[1, 2]));
    }
}
