//! Catalogue of the available eviction policies.

use std::fmt;
use std::str::FromStr;

use crate::common::Error;

/// Names one of the five eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lifo,
    Lru,
    Lfu,
    Clock,
}

impl PolicyKind {
    /// Every policy, in the order the simulator lists them.
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fifo,
        PolicyKind::Lifo,
        PolicyKind::Lru,
        PolicyKind::Lfu,
        PolicyKind::Clock,
    ];

    /// Upper-case label used in menus and captions.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lifo => "LIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Lfu => "LFU",
            PolicyKind::Clock => "CLOCK",
        }
    }

    /// One-line statement of the eviction rule, shown next to the cache.
    pub fn description(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "The page that entered the cache first is evicted",
            PolicyKind::Lifo => "The page that entered the cache last is evicted",
            PolicyKind::Lru => "The page unused for the longest time is evicted",
            PolicyKind::Lfu => "The page used the fewest times is evicted (oldest first on ties)",
            PolicyKind::Clock => {
                "Second chance: bit = 1 is lowered to 0 and skipped, bit = 0 is replaced"
            }
        }
    }

    /// Whether `access` can return an intermediate `Step`.
    pub fn has_multi_tick_scan(self) -> bool {
        self == PolicyKind::Clock
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}
