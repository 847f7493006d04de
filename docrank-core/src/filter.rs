//! Eligibility filter applied before ranking.

use crate::document::Segment;

/// Drops segments whose trimmed text is too short to embed meaningfully.
///
/// Cover pages, blank pages and navigation artifacts usually fall under the
/// threshold. Length is counted in Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy)]
pub struct SegmentFilter {
    min_chars: usize,
}

impl SegmentFilter {
    /// Create a filter keeping segments with at least `min_chars` characters.
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Whether a single segment is eligible for ranking.
    pub fn is_eligible(&self, segment: &Segment) -> bool {
        segment.text.trim().chars().count() >= self.min_chars
    }

    /// Return the eligible segments, preserving input order.
    pub fn apply<'a>(&self, segments: &'a [Segment]) -> Vec<&'a Segment> {
        segments.iter().filter(|s| self.is_eligible(s)).collect()
    }
}

impl Default for SegmentFilter {
    fn default() -> Self {
        Self::new(100)
    }
}
