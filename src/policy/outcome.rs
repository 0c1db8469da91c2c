//! Result of a single `access` call.

use std::fmt;

use crate::common::PageId;

/// What happened to one access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessOutcome {
    /// The page was already resident.
    Hit,

    /// The page was loaded, possibly evicting another one.
    Miss,

    /// CLOCK only: the hand cleared a reference bit and moved on.
    ///
    /// The request is not resolved yet; call `access` again with the same
    /// page to continue the scan.
    Step,
}

impl AccessOutcome {
    /// Hit and Miss resolve a request; Step does not.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, AccessOutcome::Step)
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccessOutcome::Hit => "HIT",
            AccessOutcome::Miss => "MISS",
            AccessOutcome::Step => "STEP",
        };
        f.write_str(label)
    }
}

/// Outcome plus the page that was evicted, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessResult {
    pub outcome: AccessOutcome,
    pub evicted: Option<PageId>,
}

impl AccessResult {
    #[inline]
    pub fn hit() -> Self {
        Self {
            outcome: AccessOutcome::Hit,
            evicted: None,
        }
    }

    #[inline]
    pub fn miss(evicted: Option<PageId>) -> Self {
        Self {
            outcome: AccessOutcome::Miss,
            evicted,
        }
    }

    #[inline]
    pub fn step() -> Self {
        Self {
            outcome: AccessOutcome::Step,
            evicted: None,
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.outcome == AccessOutcome::Hit
    }

    #[inline]
    pub fn is_miss(&self) -> bool {
        self.outcome == AccessOutcome::Miss
    }

    #[inline]
    pub fn is_step(&self) -> bool {
        self.outcome == AccessOutcome::Step
    }
}

impl fmt::Display for AccessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.evicted {
            Some(page) => write!(f, "{} (evicted {})", self.outcome, page),
            None => write!(f, "{}", self.outcome),
        }
    }
}
