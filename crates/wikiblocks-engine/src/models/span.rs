use serde::{Deserialize, Serialize};

/// A character range `[start, end)` into a block's text.
///
/// Offsets count Unicode scalar values, not UTF-8 bytes, so they line up with
/// how consumers of the block JSON measure string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start offset.
    #[serde(rename = "startIdx")]
    pub start: usize,
    /// Exclusive end offset.
    #[serde(rename = "endIdx")]
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in characters. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Moves both bounds right by `offset`.
    #[must_use]
    pub fn shifted(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}
