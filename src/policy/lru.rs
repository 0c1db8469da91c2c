//! LRU (Least-Recently-Used) replacement policy.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::common::{PageId, Result};
use crate::policy::{
    check_capacity, AccessResult, CacheState, EvictionPolicy, PolicyKind, PolicyStats,
    StatsSnapshot,
};

/// Evicts the page that has gone unused for the longest time.
///
/// Residents are kept in recency order, least recently used at the front.
/// Lookups are a linear scan; a teaching cache holds a handful of frames.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    capacity: usize,

    /// Front = least recently used, back = most recently used.
    order: VecDeque<PageId>,

    stats: PolicyStats,
}

impl LruPolicy {
    /// Create an empty LRU cache.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        Ok(Self {
            capacity,
            order: VecDeque::with_capacity(capacity),
            stats: PolicyStats::new(),
        })
    }

    fn position(&self, page: PageId) -> Option<usize> {
        self.order.iter().position(|&p| p == page)
    }
}

impl EvictionPolicy for LruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.position(page).is_some()
    }

    fn access(&mut self, page: PageId) -> AccessResult {
        if let Some(idx) = self.position(page) {
            // Move to the most-recently-used end
            self.order.remove(idx);
            self.order.push_back(page);
            trace!("lru: hit {}", page);

            let result = AccessResult::hit();
            self.stats.record(&result);
            return result;
        }

        let mut evicted = None;
        if self.order.len() >= self.capacity {
            evicted = self.order.pop_front();
            if let Some(victim) = evicted {
                debug!("lru: evict {} for {}", victim, page);
            }
        }

        self.order.push_back(page);

        let result = AccessResult::miss(evicted);
        self.stats.record(&result);
        result
    }

    fn cache_state(&self) -> CacheState {
        CacheState::Linear(self.order.iter().copied().collect())
    }

    fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
