//! Error types for the `docrank-core` crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading inputs, ranking, or writing cases.
#[derive(Debug, Error)]
pub enum RankError {
    /// The corpus file is missing or malformed. Fatal for the whole run.
    #[error("Corpus load error ({path}): {message}")]
    CorpusLoad {
        /// Path of the corpus file.
        path: PathBuf,
        /// A description of the failure.
        message: String,
    },

    /// A single task file is missing or malformed.
    #[error("Task load error ({path}): {message}")]
    TaskLoad {
        /// Path of the task file.
        path: PathBuf,
        /// A description of the failure.
        message: String,
    },

    /// A task was loaded but cannot be ranked (for example a blank query).
    #[error("Invalid task: {0}")]
    InvalidTask(String),

    /// The embedding provider failed or returned unusable vectors.
    #[error("Embedding unavailable ({provider}): {message}")]
    EmbeddingUnavailable {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing a case output file failed.
    #[error("Output error ({path}): {message}")]
    Output {
        /// Path of the file being written.
        path: PathBuf,
        /// A description of the failure.
        message: String,
    },
}

impl RankError {
    /// Whether the orchestrator may skip the affected task and continue.
    ///
    /// Only task-level failures are recoverable; corpus, provider, config and
    /// output failures halt the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::TaskLoad { .. } | Self::InvalidTask(_))
    }

    pub(crate) fn embedding(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::EmbeddingUnavailable { provider: provider.into(), message: message.into() }
    }
}

/// A convenience result type for ranking operations.
pub type Result<T> = std::result::Result<T, RankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_task_level_errors_are_recoverable() {
        let task = RankError::TaskLoad { path: "t.json".into(), message: "missing".into() };
        assert!(task.is_recoverable());
        assert!(RankError::InvalidTask("blank query".into()).is_recoverable());

        let corpus = RankError::CorpusLoad { path: "c.json".into(), message: "bad".into() };
        assert!(!corpus.is_recoverable());
        assert!(!RankError::embedding("Hash", "down").is_recoverable());
        assert!(!RankError::Config("top_k".into()).is_recoverable());
    }

    #[test]
    fn display_includes_provider_and_path() {
        let err = RankError::embedding("OpenAI", "request failed");
        assert_eq!(err.to_string(), "Embedding unavailable (OpenAI): request failed");

        let err = RankError::TaskLoad { path: "persona_task_1.json".into(), message: "eof".into() };
        assert_eq!(err.to_string(), "Task load error (persona_task_1.json): eof");
    }
}
