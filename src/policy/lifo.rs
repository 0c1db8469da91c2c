//! LIFO (Last-In-First-Out) replacement policy.

use std::collections::HashSet;

use log::{debug, trace};

use crate::common::{PageId, Result};
use crate::policy::{
    check_capacity, AccessResult, CacheState, EvictionPolicy, PolicyKind, PolicyStats,
    StatsSnapshot,
};

/// Evicts the most recently loaded page.
///
/// Like FIFO, only insertion order matters; a hit leaves the stack alone.
/// The two differ only in which end gets evicted.
#[derive(Debug, Clone)]
pub struct LifoPolicy {
    capacity: usize,

    /// Resident pages, top of the stack last.
    stack: Vec<PageId>,

    resident: HashSet<PageId>,

    stats: PolicyStats,
}

impl LifoPolicy {
    /// Create an empty LIFO cache.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        Ok(Self {
            capacity,
            stack: Vec::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
            stats: PolicyStats::new(),
        })
    }
}

impl EvictionPolicy for LifoPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lifo
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    fn access(&mut self, page: PageId) -> AccessResult {
        if self.resident.contains(&page) {
            trace!("lifo: hit {}", page);
            let result = AccessResult::hit();
            self.stats.record(&result);
            return result;
        }

        let mut evicted = None;
        if self.stack.len() >= self.capacity {
            evicted = self.stack.pop();
            if let Some(victim) = evicted {
                self.resident.remove(&victim);
                debug!("lifo: evict {} for {}", victim, page);
            }
        }

        self.stack.push(page);
        self.resident.insert(page);

        let result = AccessResult::miss(evicted);
        self.stats.record(&result);
        result
    }

    fn cache_state(&self) -> CacheState {
        CacheState::Linear(self.stack.clone())
    }

    fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
