//! ClockFrame - one slot of the CLOCK ring.
//!
//! A [`ClockFrame`] is either empty or holds one page, plus the single
//! reference bit the second-chance scan inspects.

use std::fmt;

use crate::common::PageId;

/// A physical slot in the CLOCK policy's circular array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockFrame {
    /// Which page is loaded, or None if the slot is empty.
    page: Option<PageId>,

    /// Set on load and on every hit; cleared when the hand passes over.
    referenced: bool,
}

impl ClockFrame {
    /// Create a new empty frame with its bit cleared.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn page(&self) -> Option<PageId> {
        self.page
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
    }

    #[inline]
    pub fn holds(&self, page: PageId) -> bool {
        self.page == Some(page)
    }

    /// The reference bit as the 0/1 value shown to students.
    #[inline]
    pub fn bit(&self) -> u8 {
        u8::from(self.referenced)
    }

    #[inline]
    pub fn is_referenced(&self) -> bool {
        self.referenced
    }

    /// Mark the frame as recently used.
    #[inline]
    pub fn reference(&mut self) {
        self.referenced = true;
    }

    /// Take away the frame's second chance.
    #[inline]
    pub fn clear_reference(&mut self) {
        self.referenced = false;
    }

    /// Load `page` with its bit set, returning whatever was there before.
    pub fn load(&mut self, page: PageId) -> Option<PageId> {
        self.referenced = true;
        self.page.replace(page)
    }
}

impl fmt::Display for ClockFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.page {
            Some(page) => write!(f, "[{}|{}]", page, self.bit()),
            None => write!(f, "[-|{}]", self.bit()),
        }
    }
}
