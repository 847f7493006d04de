use std::sync::Arc;

use docrank_core::hashing::DEFAULT_DIMENSIONS;
use docrank_core::{EmbeddingProvider, HashEmbeddingProvider};

use crate::cli::{ProviderKind, RankingArgs};

/// Build the embedding provider once for the whole run.
pub fn build_provider(args: &RankingArgs) -> anyhow::Result<Arc<dyn EmbeddingProvider>> {
    match args.provider {
        ProviderKind::Hash => {
            if args.model.is_some() || args.base_url.is_some() {
                tracing::warn!("--model and --base-url are ignored by the hash provider");
            }
            let dimensions = args.dimensions.unwrap_or(DEFAULT_DIMENSIONS);
            anyhow::ensure!(dimensions > 0, "--dimensions must be greater than zero");
            Ok(Arc::new(HashEmbeddingProvider::new(dimensions)))
        }
        ProviderKind::Openai => build_openai(args),
    }
}

#[cfg(feature = "openai")]
fn build_openai(args: &RankingArgs) -> anyhow::Result<Arc<dyn EmbeddingProvider>> {
    let mut provider = docrank_core::OpenAIEmbeddingProvider::from_env()?;
    if let Some(base_url) = &args.base_url {
        provider = provider.with_base_url(base_url);
    }
    if let Some(model) = &args.model {
        provider = provider.with_model(model);
    }
    if let Some(dimensions) = args.dimensions {
        provider = provider.with_dimensions(dimensions);
    }
    Ok(Arc::new(provider))
}

#[cfg(not(feature = "openai"))]
fn build_openai(_args: &RankingArgs) -> anyhow::Result<Arc<dyn EmbeddingProvider>> {
    anyhow::bail!("the openai provider requires docrank to be built with `--features openai`")
}
