//! Offline embedding provider based on feature hashing.
//!
//! [`HashEmbeddingProvider`] needs no model files or network access. Each
//! lowercase alphanumeric token is hashed with FNV-1a into one of
//! `dimensions` buckets and the resulting term-frequency vector is
//! L2-normalised. Two texts score high when they share vocabulary, which is
//! enough for demos, tests and air-gapped runs.

use async_trait::async_trait;
use tracing::debug;

use crate::embedding::EmbeddingProvider;
use crate::error::{RankError, Result};

/// Dimensionality of `all-MiniLM-L6-v2`, kept as the default so output files
/// stay comparable in size with the model-backed setup.
pub const DEFAULT_DIMENSIONS: usize = 384;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// A deterministic bag-of-words embedding provider.
#[derive(Debug, Clone)]
pub struct HashEmbeddingProvider {
    dimensions: usize,
}

impl HashEmbeddingProvider {
    /// Create a provider producing vectors of the given size.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn bucket(&self, token: &str) -> usize {
        let hash = token
            .bytes()
            .fold(FNV_OFFSET, |acc, b| (acc ^ u64::from(b)).wrapping_mul(FNV_PRIME));
        (hash % self.dimensions as u64) as usize
    }
}

impl Default for HashEmbeddingProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

#[async_trait]
impl EmbeddingProvider for HashEmbeddingProvider {
    fn name(&self) -> &str {
        "Hash"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if self.dimensions == 0 {
            return Err(RankError::embedding(self.name(), "dimensions must be greater than zero"));
        }

        let mut embedding = vec![0.0f32; self.dimensions];
        let mut token_count = 0usize;
        for token in tokens(text) {
            embedding[self.bucket(&token)] += 1.0;
            token_count += 1;
        }

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            embedding.iter_mut().for_each(|x| *x /= norm);
        }

        debug!(provider = "Hash", token_count, "embedded text");
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
