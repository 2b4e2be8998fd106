use serde::{Deserialize, Serialize};

/// A byte range `[start, end)` into a host buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl TextSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span, e.g. a caret.
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Length in bytes, zero for an inverted span.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// True when the spans share at least one byte, or touch end to start.
    pub fn touches(self, other: TextSpan) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn union(self, other: TextSpan) -> TextSpan {
        TextSpan {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<std::ops::Range<usize>> for TextSpan {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Sorts spans and merges any that touch, so each region is edited once.
pub fn coalesce(spans: &[TextSpan]) -> Vec<TextSpan> {
    let mut sorted = spans.to_vec();
    sorted.sort();

    let mut merged: Vec<TextSpan> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match merged.last_mut() {
            Some(last) if last.touches(span) => *last = last.union(span),
            _ => merged.push(span),
        }
    }
    merged
}
