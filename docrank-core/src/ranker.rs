//! Relevance ranking of segments against a task query.
//!
//! [`RelevanceRanker::rank`] runs filter → embed → score → sort → truncate →
//! annotate. The query is embedded exactly once per call and every eligible
//! segment is embedded in one batch. Ordering is a stable descending sort on
//! the rounded score, so segments with equal scores keep their input order
//! and identical inputs always produce identical output.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::config::RankConfig;
use crate::document::{RankedResult, Segment};
use crate::embedding::EmbeddingProvider;
use crate::error::{RankError, Result};
use crate::filter::SegmentFilter;

/// Placeholder title for segments without a usable heading line.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Scores segments by cosine similarity to a query embedding.
///
/// # Example
///
/// ```rust,ignore
/// use docrank_core::{HashEmbeddingProvider, RankConfig, RelevanceRanker};
///
/// let ranker = RelevanceRanker::new(Arc::new(HashEmbeddingProvider::default()), &RankConfig::default());
/// let top = ranker.rank(&corpus.pages, "plan a four day trip", 10).await?;
/// ```
pub struct RelevanceRanker {
    provider: Arc<dyn EmbeddingProvider>,
    filter: SegmentFilter,
    max_title_chars: usize,
}

impl RelevanceRanker {
    /// Create a ranker using the given provider and the filter/title settings
    /// from `config`.
    pub fn new(provider: Arc<dyn EmbeddingProvider>, config: &RankConfig) -> Self {
        Self {
            provider,
            filter: SegmentFilter::new(config.min_segment_chars),
            max_title_chars: config.max_title_chars,
        }
    }

    /// Return a reference to the embedding provider.
    pub fn provider(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.provider
    }

    /// Rank `segments` by relevance to `query`, keeping at most `top_k`.
    ///
    /// Returns an empty list when no segment passes the filter.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::EmbeddingUnavailable`] if the provider fails or
    /// returns vectors that cannot be compared with the query vector.
    pub async fn rank(
        &self,
        segments: &[Segment],
        query: &str,
        top_k: usize,
    ) -> Result<Vec<RankedResult>> {
        let eligible = self.filter.apply(segments);
        debug!(
            total = segments.len(),
            eligible = eligible.len(),
            "filtered segments for ranking"
        );

        let query_embedding = self.provider.embed(query).await.map_err(|e| {
            error!(provider = self.provider.name(), error = %e, "query embedding failed");
            self.unavailable(e)
        })?;

        if eligible.is_empty() {
            info!(result_count = 0, "ranking completed (no eligible segments)");
            return Ok(Vec::new());
        }

        let texts: Vec<&str> = eligible.iter().map(|s| s.text.as_str()).collect();
        let embeddings = self.provider.embed_batch(&texts).await.map_err(|e| {
            error!(provider = self.provider.name(), error = %e, "segment embedding failed");
            self.unavailable(e)
        })?;
        if embeddings.len() != eligible.len() {
            return Err(RankError::embedding(
                self.provider.name(),
                format!("expected {} embeddings, got {}", eligible.len(), embeddings.len()),
            ));
        }

        let mut scored = Vec::with_capacity(eligible.len());
        for (segment, embedding) in eligible.into_iter().zip(&embeddings) {
            if embedding.len() != query_embedding.len() {
                return Err(RankError::embedding(
                    self.provider.name(),
                    format!(
                        "dimension mismatch for {} page {}: query has {}, segment has {}",
                        segment.document,
                        segment.page_number,
                        query_embedding.len(),
                        embedding.len()
                    ),
                ));
            }
            let score = round_score(cosine_similarity(&query_embedding, embedding));
            scored.push((segment, score));
        }

        // `sort_by` is stable: ties keep first-seen order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(top_k);

        let results: Vec<RankedResult> = scored
            .into_iter()
            .zip(1u32..)
            .map(|((segment, similarity_score), importance_rank)| RankedResult {
                section_title: section_title(&segment.text, self.max_title_chars),
                segment: segment.clone(),
                similarity_score,
                importance_rank,
            })
            .collect();

        info!(result_count = results.len(), top_k, "ranking completed");
        Ok(results)
    }

    fn unavailable(&self, err: RankError) -> RankError {
        match err {
            err @ RankError::EmbeddingUnavailable { .. } => err,
            other => RankError::embedding(self.provider.name(), other.to_string()),
        }
    }
}

/// Cosine similarity of two equal-length vectors, clamped to `[-1, 1]`.
///
/// Accumulates in `f64`. Returns 0.0 if either vector has zero magnitude or
/// the result is not finite.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let score = dot / (norm_a.sqrt() * norm_b.sqrt());
    if score.is_finite() { score.clamp(-1.0, 1.0) } else { 0.0 }
}

/// Round a score to 4 decimal places.
///
/// Rounds the exact binary value, so `0.33335` (stored just below the
/// midpoint) becomes `0.3333`. Scaling by 10 000 first would round it up.
pub fn round_score(score: f64) -> f64 {
    format!("{score:.4}").parse().unwrap_or(score)
}

/// The first non-empty trimmed line shorter than `max_chars` characters, or
/// [`UNKNOWN_TITLE`].
pub fn section_title(text: &str, max_chars: usize) -> String {
    text.trim()
        .split('\n')
        .map(str::trim)
        .find(|line| !line.is_empty() && line.chars().count() < max_chars)
        .map_or_else(|| UNKNOWN_TITLE.to_string(), str::to_string)
}
