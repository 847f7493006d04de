//! Persona-driven ranking of document page segments.
//!
//! Given a corpus of extracted PDF pages and a list of "persona + job to be
//! done" tasks, this crate ranks the pages by embedding similarity to each
//! task's query and produces one case output per task:
//!
//! - [`SegmentFilter`] drops pages too short to rank
//! - [`RelevanceRanker`] scores, orders and truncates the rest
//! - [`ResultRefiner`] derives short summaries of the selected pages
//! - [`CaseOrchestrator`] runs the pipeline for every task
//!
//! Embeddings come from an injected [`EmbeddingProvider`]. The offline
//! [`HashEmbeddingProvider`] is always available; an OpenAI-compatible HTTP
//! provider is behind the `openai` feature.

pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod filter;
pub mod hashing;
pub mod loader;
#[cfg(feature = "openai")]
pub mod openai;
pub mod orchestrator;
pub mod output;
pub mod ranker;
pub mod refiner;

pub use config::{RankConfig, RankConfigBuilder};
pub use document::{CaseOutput, Corpus, RankedResult, RefinedResult, Segment, Task};
pub use embedding::EmbeddingProvider;
pub use error::{RankError, Result};
pub use filter::SegmentFilter;
pub use hashing::HashEmbeddingProvider;
pub use loader::{discover_task_files, load_corpus, load_task};
#[cfg(feature = "openai")]
pub use openai::OpenAIEmbeddingProvider;
pub use orchestrator::{CaseOrchestrator, CaseReport, SkippedCase, TaskSource};
pub use output::{case_file_name, write_case};
pub use ranker::RelevanceRanker;
pub use refiner::ResultRefiner;
