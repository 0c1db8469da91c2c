//! Eviction policy implementations.
//!
//! Every policy owns its own frame store and answers one request at a time
//! through [`EvictionPolicy::access`]:
//! - [`FifoPolicy`] - evicts the oldest insertion (queue)
//! - [`LifoPolicy`] - evicts the newest insertion (stack)
//! - [`LruPolicy`] - evicts the least recently used page
//! - [`LfuPolicy`] - evicts the least frequently used page, oldest on ties
//! - [`ClockPolicy`] - second chance; may need several ticks per miss
//!
//! [`Policy`] wraps all five in one enum so the driver can swap algorithms
//! when the configuration changes.

mod clock;
mod fifo;
mod frame;
mod kind;
mod lfu;
mod lifo;
mod lru;
mod outcome;
mod state;
mod stats;

pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use frame::ClockFrame;
pub use kind::PolicyKind;
pub use lfu::LfuPolicy;
pub use lifo::LifoPolicy;
pub use lru::LruPolicy;
pub use outcome::{AccessOutcome, AccessResult};
pub use state::{CacheState, FrequencyEntry};
pub use stats::{PolicyStats, StatsSnapshot};

use crate::common::{Error, FrameId, PageId, Result};

/// The contract every page-replacement policy implements.
///
/// Policies are plain owned data: `Clone` produces a fully independent copy,
/// which is what the driver's history relies on.
pub trait EvictionPolicy {
    /// Which algorithm this is.
    fn kind(&self) -> PolicyKind;

    /// Number of frames, fixed at construction.
    fn capacity(&self) -> usize;

    /// Number of resident pages.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Whether `page` is currently resident.
    fn contains(&self, page: PageId) -> bool;

    /// Serve one request for `page`.
    ///
    /// Returns `Hit` or `Miss` (with the evicted page, if any). CLOCK may
    /// also return `Step`, in which case the request is still pending and
    /// the caller must call `access` again with the same page.
    fn access(&mut self, page: PageId) -> AccessResult;

    /// Display snapshot of the frame store.
    fn cache_state(&self) -> CacheState;

    /// Current hit/miss/eviction counters.
    fn stats(&self) -> StatsSnapshot;

    /// Resident pages in the policy's display order.
    fn residents(&self) -> Vec<PageId> {
        self.cache_state().pages()
    }
}

/// Reject zero-sized caches.
pub(crate) fn check_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        Err(Error::InvalidCapacity(capacity))
    } else {
        Ok(capacity)
    }
}

/// Any of the five policies, chosen at runtime.
///
/// # Example
/// ```
/// use pagingsim::policy::{AccessOutcome, EvictionPolicy, Policy, PolicyKind};
/// use pagingsim::PageId;
///
/// let mut policy = Policy::new(PolicyKind::Lru, 3).unwrap();
/// assert_eq!(policy.access(PageId::new(1)).outcome, AccessOutcome::Miss);
/// assert_eq!(policy.access(PageId::new(1)).outcome, AccessOutcome::Hit);
/// ```
#[derive(Debug, Clone)]
pub enum Policy {
    Fifo(FifoPolicy),
    Lifo(LifoPolicy),
    Lru(LruPolicy),
    Lfu(LfuPolicy),
    Clock(ClockPolicy),
}

macro_rules! dispatch {
    ($self:expr, $p:ident => $body:expr) => {
        match $self {
            Policy::Fifo($p) => $body,
            Policy::Lifo($p) => $body,
            Policy::Lru($p) => $body,
            Policy::Lfu($p) => $body,
            Policy::Clock($p) => $body,
        }
    };
}

impl Policy {
    /// Build an empty policy of the given kind.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(kind: PolicyKind, capacity: usize) -> Result<Self> {
        Ok(match kind {
            PolicyKind::Fifo => Policy::Fifo(FifoPolicy::new(capacity)?),
            PolicyKind::Lifo => Policy::Lifo(LifoPolicy::new(capacity)?),
            PolicyKind::Lru => Policy::Lru(LruPolicy::new(capacity)?),
            PolicyKind::Lfu => Policy::Lfu(LfuPolicy::new(capacity)?),
            PolicyKind::Clock => Policy::Clock(ClockPolicy::new(capacity)?),
        })
    }

    /// Position of the CLOCK hand; `None` for the other policies.
    pub fn hand(&self) -> Option<FrameId> {
        match self {
            Policy::Clock(clock) => Some(clock.hand()),
            _ => None,
        }
    }
}

impl EvictionPolicy for Policy {
    fn kind(&self) -> PolicyKind {
        dispatch!(self, p => p.kind())
    }

    fn capacity(&self) -> usize {
        dispatch!(self, p => p.capacity())
    }

    fn len(&self) -> usize {
        dispatch!(self, p => p.len())
    }

    fn contains(&self, page: PageId) -> bool {
        dispatch!(self, p => p.contains(page))
    }

    fn access(&mut self, page: PageId) -> AccessResult {
        dispatch!(self, p => p.access(page))
    }

    fn cache_state(&self) -> CacheState {
        dispatch!(self, p => p.cache_state())
    }

    fn stats(&self) -> StatsSnapshot {
        dispatch!(self, p => p.stats())
    }

    fn residents(&self) -> Vec<PageId> {
        dispatch!(self, p => p.residents())
    }
}
