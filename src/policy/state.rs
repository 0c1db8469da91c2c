//! Read-only cache snapshots for the display layer.

use std::fmt;

use crate::common::{FrameId, PageId};
use crate::policy::ClockFrame;

/// A resident page and how many times it has been requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub page: PageId,
    pub frequency: u64,
}

/// What the cache looks like right now.
///
/// The shape depends on the policy, because each policy has a different
/// notion of "the order that matters":
///
/// | Policy | Variant     | Order                           |
/// |--------|-------------|---------------------------------|
/// | FIFO   | `Linear`    | oldest first                    |
/// | LIFO   | `Linear`    | bottom of stack first           |
/// | LRU    | `Linear`    | least recently used first       |
/// | LFU    | `Frequency` | insertion order                 |
/// | CLOCK  | `Clock`     | physical slot order, plus hand  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheState {
    Linear(Vec<PageId>),
    Frequency(Vec<FrequencyEntry>),
    Clock {
        slots: Vec<ClockFrame>,
        hand: FrameId,
    },
}

impl CacheState {
    /// Resident pages in display order, skipping empty CLOCK slots.
    pub fn pages(&self) -> Vec<PageId> {
        match self {
            CacheState::Linear(pages) => pages.clone(),
            CacheState::Frequency(entries) => entries.iter().map(|e| e.page).collect(),
            CacheState::Clock { slots, .. } => slots.iter().filter_map(|s| s.page()).collect(),
        }
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        match self {
            CacheState::Linear(pages) => pages.len(),
            CacheState::Frequency(entries) => entries.len(),
            CacheState::Clock { slots, .. } => slots.iter().filter(|s| !s.is_empty()).count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for CacheState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheState::Linear(pages) => {
                let items: Vec<String> = pages.iter().map(|p| p.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            CacheState::Frequency(entries) => {
                let items: Vec<String> = entries
                    .iter()
                    .map(|e| format!("{}:{}", e.page, e.frequency))
                    .collect();
                write!(f, "[{}]", items.join(", "))
            }
            CacheState::Clock { slots, hand } => {
                for (i, slot) in slots.iter().enumerate() {
                    if i == hand.0 {
                        write!(f, ">")?;
                    }
                    write!(f, "{}", slot)?;
                }
                Ok(())
            }
        }
    }
}
