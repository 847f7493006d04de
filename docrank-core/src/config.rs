//! Configuration for ranking and refinement.

use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};

/// Tuning parameters shared by the filter, ranker and refiner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankConfig {
    /// Number of top results kept per task.
    pub top_k: usize,
    /// Minimum trimmed text length, in characters, for a segment to be ranked.
    pub min_segment_chars: usize,
    /// Section titles must be strictly shorter than this many characters.
    pub max_title_chars: usize,
    /// Number of `". "`-delimited fragments kept in a refined summary.
    pub summary_fragments: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self { top_k: 10, min_segment_chars: 100, max_title_chars: 100, summary_fragments: 2 }
    }
}

impl RankConfig {
    /// Create a new builder for constructing a [`RankConfig`].
    pub fn builder() -> RankConfigBuilder {
        RankConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`RankConfig`].
#[derive(Debug, Clone, Default)]
pub struct RankConfigBuilder {
    config: RankConfig,
}

impl RankConfigBuilder {
    /// Set the number of top results kept per task.
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Set the minimum segment length in characters.
    pub fn min_segment_chars(mut self, chars: usize) -> Self {
        self.config.min_segment_chars = chars;
        self
    }

    /// Set the exclusive upper bound on section title length.
    pub fn max_title_chars(mut self, chars: usize) -> Self {
        self.config.max_title_chars = chars;
        self
    }

    /// Set how many sentence fragments a refined summary keeps.
    pub fn summary_fragments(mut self, fragments: usize) -> Self {
        self.config.summary_fragments = fragments;
        self
    }

    /// Build the [`RankConfig`], validating that parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::Config`] if `top_k`, `max_title_chars` or
    /// `summary_fragments` is zero.
    pub fn build(self) -> Result<RankConfig> {
        if self.config.top_k == 0 {
            return Err(RankError::Config("top_k must be greater than zero".to_string()));
        }
        if self.config.max_title_chars == 0 {
            return Err(RankError::Config("max_title_chars must be greater than zero".to_string()));
        }
        if self.config.summary_fragments == 0 {
            return Err(RankError::Config(
                "summary_fragments must be greater than zero".to_string(),
            ));
        }
        Ok(self.config)
    }
}
