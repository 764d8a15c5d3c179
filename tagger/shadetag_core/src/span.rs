//! Byte-offset spans into a document.

use std::fmt;

/// Half-open byte range `start..end` into a document.
///
/// Offsets are `u32` byte positions in UTF-8 text. A `Span` is cheap to copy
/// and is used both for the caller's requested regions and for token extents.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a span from its bounds.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a span from an `(offset, length)` pair.
    ///
    /// The end saturates at `u32::MAX`; such a span is rejected later as out
    /// of range rather than wrapping around to a small offset.
    #[inline]
    pub const fn with_len(start: u32, len: u32) -> Self {
        Span {
            start,
            end: start.saturating_add(len),
        }
    }

    /// Length of the span in bytes. Zero for inverted spans.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check whether two spans share at least one byte.
    ///
    /// Touching spans (`a.end == b.start`) do not intersect, and an empty
    /// span intersects nothing.
    #[inline]
    pub fn intersects(&self, other: Span) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
