//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use log::{debug, trace};

use crate::common::{PageId, Result};
use crate::policy::{
    check_capacity, AccessResult, CacheState, EvictionPolicy, PolicyKind, PolicyStats,
    StatsSnapshot,
};

/// Evicts pages in the order they were loaded.
///
/// Hits do not reorder anything: a page that is requested over and over is
/// still evicted as soon as it becomes the oldest resident.
#[derive(Debug, Clone)]
pub struct FifoPolicy {
    capacity: usize,

    /// Resident pages in insertion order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    stats: PolicyStats,
}

impl FifoPolicy {
    /// Create an empty FIFO cache.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        Ok(Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
            stats: PolicyStats::new(),
        })
    }
}

impl EvictionPolicy for FifoPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    fn access(&mut self, page: PageId) -> AccessResult {
        if self.resident.contains(&page) {
            trace!("fifo: hit {}", page);
            let result = AccessResult::hit();
            self.stats.record(&result);
            return result;
        }

        let mut evicted = None;
        if self.queue.len() >= self.capacity {
            evicted = self.queue.pop_front();
            if let Some(victim) = evicted {
                self.resident.remove(&victim);
                debug!("fifo: evict {} for {}", victim, page);
            }
        }

        self.queue.push_back(page);
        self.resident.insert(page);

        let result = AccessResult::miss(evicted);
        self.stats.record(&result);
        result
    }

    fn cache_state(&self) -> CacheState {
        CacheState::Linear(self.queue.iter().copied().collect())
    }

    fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
