//! Frame identifier type.

use std::fmt;

/// Identifies a physical slot in a fixed-size frame array.
///
/// Used by the CLOCK policy for its slots and for the position of the hand.
/// `usize` so it indexes the backing `Vec` directly: `frames[frame_id.0]`.
///
/// # Example
/// ```
/// use pagingsim::FrameId;
///
/// let hand = FrameId::new(2);
/// assert_eq!(hand.advance(3), FrameId::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// The next slot on a circular array of `len` slots.
    ///
    /// # Panics
    /// Panics if `len` is 0.
    #[inline]
    pub fn advance(self, len: usize) -> Self {
        assert!(len > 0, "cannot advance on an empty ring");
        FrameId((self.0 + 1) % len)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_id_new() {
        let fid = FrameId::new(10);
        assert_eq!(fid.0, 10);
        assert_eq!(FrameId::default(), FrameId::new(0));
    }

    #[test]
    fn test_frame_id_advance_wraps() {
        assert_eq!(FrameId::new(0).advance(3), FrameId::new(1));
        assert_eq!(FrameId::new(2).advance(3), FrameId::new(0));
        assert_eq!(FrameId::new(0).advance(1), FrameId::new(0));
    }

    #[test]
    #[should_panic(expected = "cannot advance on an empty ring")]
    fn test_frame_id_advance_empty_ring() {
        FrameId::new(0).advance(0);
    }

    #[test]
    fn test_frame_id_display() {
        assert_eq!(format!("{}", FrameId::new(42)), "Frame(42)");
    }
}
