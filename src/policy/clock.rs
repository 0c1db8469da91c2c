//! CLOCK (second chance) replacement policy.
//!
//! Frames sit on a ring with a hand pointing at the next candidate. A miss
//! is resolved one tick at a time:
//!
//! ```text
//!    hand
//!     ▼
//!   [1|1] [2|0] [3|1]      page | reference bit
//!
//!   bit 1 under the hand:  clear it, move the hand      (Step)
//!   bit 0 under the hand:  evict, load, move the hand   (Miss)
//!   empty under the hand:  load, move the hand          (Miss)
//! ```
//!
//! Each cleared bit is reported as its own [`AccessOutcome::Step`] so the
//! scan can be watched; the caller re-issues the same request to continue.
//!
//! [`AccessOutcome::Step`]: crate::policy::AccessOutcome::Step

use log::{debug, trace};

use crate::common::{FrameId, PageId, Result};
use crate::policy::{
    check_capacity, AccessResult, CacheState, ClockFrame, EvictionPolicy, PolicyKind,
    PolicyStats, StatsSnapshot,
};

/// Second-chance replacement over a fixed ring of frames.
///
/// # Invariants
/// - `frames.len() == capacity`, always; empty slots are `ClockFrame`s with
///   no page.
/// - The hand only moves on the miss path. A hit sets the bit and leaves the
///   hand where it is.
/// - A pending miss resolves within `capacity + 1` ticks: at worst the hand
///   clears every bit once and then finds the first slot it cleared.
#[derive(Debug, Clone)]
pub struct ClockPolicy {
    frames: Vec<ClockFrame>,
    hand: FrameId,
    stats: PolicyStats,
}

impl ClockPolicy {
    /// Create a ring of `capacity` empty frames with the hand at slot 0.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        Ok(Self {
            frames: vec![ClockFrame::new(); capacity],
            hand: FrameId::new(0),
            stats: PolicyStats::new(),
        })
    }

    /// Slot the hand points at.
    #[inline]
    pub fn hand(&self) -> FrameId {
        self.hand
    }

    /// All slots in physical order, including empty ones.
    pub fn frames(&self) -> &[ClockFrame] {
        &self.frames
    }

    fn advance_hand(&mut self) {
        self.hand = self.hand.advance(self.frames.len());
    }

    fn find(&self, page: PageId) -> Option<usize> {
        self.frames.iter().position(|f| f.holds(page))
    }
}

impl EvictionPolicy for ClockPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Clock
    }

    fn capacity(&self) -> usize {
        self.frames.len()
    }

    fn len(&self) -> usize {
        self.frames.iter().filter(|f| !f.is_empty()).count()
    }

    fn contains(&self, page: PageId) -> bool {
        self.find(page).is_some()
    }

    fn access(&mut self, page: PageId) -> AccessResult {
        if let Some(idx) = self.find(page) {
            self.frames[idx].reference();
            trace!("clock: hit {} at slot {}", page, idx);

            let result = AccessResult::hit();
            self.stats.record(&result);
            return result;
        }

        let slot = self.hand.0;
        let frame = &mut self.frames[slot];

        let result = if frame.is_empty() {
            frame.load(page);
            trace!("clock: load {} into empty slot {}", page, slot);
            AccessResult::miss(None)
        } else if frame.is_referenced() {
            frame.clear_reference();
            trace!("clock: second chance for slot {} while loading {}", slot, page);
            AccessResult::step()
        } else {
            let evicted = frame.load(page);
            if let Some(victim) = evicted {
                debug!("clock: evict {} from slot {} for {}", victim, slot, page);
            }
            AccessResult::miss(evicted)
        };

        self.advance_hand();
        self.stats.record(&result);
        result
    }

    fn cache_state(&self) -> CacheState {
        CacheState::Clock {
            slots: self.frames.clone(),
            hand: self.hand,
        }
    }

    fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;
    use crate::policy::AccessOutcome;

    fn bits(clock: &ClockPolicy) -> Vec<u8> {
        clock.frames().iter().map(|f| f.bit()).collect()
    }

    fn filled(capacity: usize, ids: &[u32]) -> ClockPolicy {
        let mut clock = ClockPolicy::new(capacity).unwrap();
        for page in pages(ids) {
            assert!(clock.access(page).is_miss());
        }
        clock
    }

    #[test]
    fn test_clock_fills_empty_slots_in_order() {
        let clock = filled(3, &[1, 2, 3]);

        assert_eq!(
            clock.frames().iter().map(|f| f.page()).collect::<Vec<_>>(),
            vec![Some(PageId::new(1)), Some(PageId::new(2)), Some(PageId::new(3))]
        );
        assert_eq!(bits(&clock), vec![1, 1, 1]);
        assert_eq!(clock.hand(), FrameId::new(0)); // wrapped around
        assert_eq!(clock.stats().misses, 3);
    }

    #[test]
    fn test_clock_second_chance_sweep() {
        let mut clock = filled(3, &[1, 2, 3]);
        let page = PageId::new(4);

        // Every bit is set: three steps clear them, one per tick
        for expected_hand in [1, 2, 0] {
            let result = clock.access(page);
            assert_eq!(result, AccessResult::step());
            assert_eq!(clock.hand(), FrameId::new(expected_hand));
        }
        assert_eq!(bits(&clock), vec![0, 0, 0]);
        assert_eq!(clock.stats().total(), 3); // steps are not counted

        // The hand is back at slot 0 whose bit is now 0
        assert_eq!(clock.access(page), AccessResult::miss(Some(PageId::new(1))));
        assert_eq!(clock.hand(), FrameId::new(1));
        assert_eq!(bits(&clock), vec![1, 0, 0]);
        assert_eq!(clock.stats().misses, 4);
        assert_eq!(clock.stats().evictions, 1);
    }

    #[test]
    fn test_clock_step_continues_scan() {
        let mut clock = filled(3, &[1, 2, 3]);

        // Clear slot 0, then the scan must pick up at slot 1, not restart
        assert!(clock.access(PageId::new(4)).is_step());
        assert_eq!(clock.hand(), FrameId::new(1));
        assert_eq!(bits(&clock), vec![0, 1, 1]);

        assert!(clock.access(PageId::new(4)).is_step());
        assert_eq!(bits(&clock), vec![0, 0, 1]);
    }

    #[test]
    fn test_clock_evicts_first_unreferenced() {
        let mut clock = filled(3, &[1, 2, 3]);
        let four = PageId::new(4);
        while clock.access(four).is_step() {}
        // [4|1, 2|0, 3|0], hand at 1

        // 5 replaces 2 immediately: its bit was cleared by the last sweep
        assert_eq!(
            clock.access(PageId::new(5)),
            AccessResult::miss(Some(PageId::new(2)))
        );
        assert_eq!(clock.hand(), FrameId::new(2));
    }

    #[test]
    fn test_clock_hit_sets_bit_without_moving_hand() {
        let mut clock = filled(3, &[1, 2, 3]);
        let four = PageId::new(4);
        while clock.access(four).is_step() {}
        // [4|1, 2|0, 3|0], hand at 1

        assert!(clock.access(PageId::new(2)).is_hit());
        assert_eq!(clock.hand(), FrameId::new(1));
        assert_eq!(bits(&clock), vec![1, 1, 0]);

        // 2 earned a second chance, so 3 goes instead
        assert!(clock.access(PageId::new(5)).is_step());
        assert_eq!(
            clock.access(PageId::new(5)),
            AccessResult::miss(Some(PageId::new(3)))
        );
    }

    #[test]
    fn test_clock_resolves_within_bound() {
        for capacity in 1..=6 {
            let ids: Vec<u32> = (1..=capacity as u32).collect();
            let mut clock = filled(capacity, &ids);

            let mut ticks = 1;
            while clock.access(PageId::new(100)).outcome == AccessOutcome::Step {
                ticks += 1;
            }
            assert_eq!(ticks, capacity + 1);
            assert!(ticks <= 2 * capacity);
        }
    }

    #[test]
    fn test_clock_capacity_one() {
        let mut clock = filled(1, &[1]);
        assert!(clock.access(PageId::new(2)).is_step());
        assert_eq!(
            clock.access(PageId::new(2)),
            AccessResult::miss(Some(PageId::new(1)))
        );
        assert_eq!(clock.hand(), FrameId::new(0));
    }

    #[test]
    fn test_clock_cache_state() {
        let clock = filled(3, &[7]);
        match clock.cache_state() {
            CacheState::Clock { slots, hand } => {
                assert_eq!(slots.len(), 3);
                assert!(slots[0].holds(PageId::new(7)));
                assert!(slots[1].is_empty());
                assert_eq!(hand, FrameId::new(1));
            }
            other => panic!("expected clock state, got {:?}", other),
        }
    }
}
