//! Multi-task case orchestration.
//!
//! The [`CaseOrchestrator`] runs every task against the same corpus, one task
//! at a time: rank the full corpus with the task's query, refine the top
//! results, and stamp a [`CaseOutput`]. Case ids are the 1-based position of
//! each task in the input list, so a task that fails to load still consumes
//! its id and later cases keep stable file names.
//!
//! # Example
//!
//! ```rust,ignore
//! use docrank_core::{CaseOrchestrator, HashEmbeddingProvider, RankConfig, TaskSource};
//!
//! let orchestrator = CaseOrchestrator::new(Arc::new(HashEmbeddingProvider::default()), RankConfig::default());
//! let tasks = paths.iter().map(TaskSource::from_path).collect();
//! let report = orchestrator.run(&corpus, tasks).await?;
//! ```

use std::path::Path;
use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use crate::config::RankConfig;
use crate::document::{CaseOutput, Corpus, Task};
use crate::embedding::EmbeddingProvider;
use crate::error::{RankError, Result};
use crate::loader::load_task;
use crate::ranker::RelevanceRanker;
use crate::refiner::ResultRefiner;

/// A task as handed to the orchestrator: either loaded, or the reason it
/// could not be.
#[derive(Debug)]
pub struct TaskSource {
    /// Where the task came from (usually a file path), for reporting.
    pub origin: String,
    /// The loaded task or its load failure.
    pub task: Result<Task>,
}

impl TaskSource {
    /// Wrap an already loaded task.
    pub fn loaded(origin: impl Into<String>, task: Task) -> Self {
        Self { origin: origin.into(), task: Ok(task) }
    }

    /// Load a task file, capturing any failure instead of returning it.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self { origin: path.display().to_string(), task: load_task(path) }
    }
}

/// A task that produced no case output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCase {
    /// The case id the task would have had.
    pub case_id: usize,
    /// Where the task came from.
    pub origin: String,
    /// Why it was skipped.
    pub reason: String,
}

/// Everything a run produced.
#[derive(Debug, Default)]
pub struct CaseReport {
    /// Completed cases, in case id order.
    pub cases: Vec<CaseOutput>,
    /// Tasks that were skipped, in case id order.
    pub skipped: Vec<SkippedCase>,
}

/// Runs ranking and refinement for a sequence of tasks.
pub struct CaseOrchestrator {
    config: RankConfig,
    ranker: RelevanceRanker,
    refiner: ResultRefiner,
}

impl CaseOrchestrator {
    /// Create an orchestrator around an already initialised provider.
    pub fn new(provider: Arc<dyn EmbeddingProvider>, config: RankConfig) -> Self {
        let ranker = RelevanceRanker::new(provider, &config);
        let refiner = ResultRefiner::from_config(&config);
        Self { config, ranker, refiner }
    }

    /// Return a reference to the configuration.
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Run every task and collect the results.
    ///
    /// # Errors
    ///
    /// Returns the first non-recoverable error (for example
    /// [`RankError::EmbeddingUnavailable`]). Task-level failures are recorded
    /// in [`CaseReport::skipped`] instead.
    pub async fn run(&self, corpus: &Corpus, tasks: Vec<TaskSource>) -> Result<CaseReport> {
        self.run_with_sink(corpus, tasks, |_| Ok(())).await
    }

    /// Like [`run`](Self::run), but hands each case to `sink` as soon as it
    /// is produced, so cases finished before a fatal error are not lost.
    ///
    /// # Errors
    ///
    /// Returns the first non-recoverable error from ranking or from `sink`.
    pub async fn run_with_sink<F>(
        &self,
        corpus: &Corpus,
        tasks: Vec<TaskSource>,
        mut sink: F,
    ) -> Result<CaseReport>
    where
        F: FnMut(&CaseOutput) -> Result<()>,
    {
        let mut report = CaseReport::default();

        for (case_id, source) in (1..).zip(tasks) {
            let outcome = match source.task {
                Ok(task) => self.run_case(case_id, corpus, &task).await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(case) => {
                    sink(&case)?;
                    report.cases.push(case);
                }
                Err(e) if e.is_recoverable() => {
                    warn!(case_id, origin = %source.origin, error = %e, "skipping task");
                    report.skipped.push(SkippedCase {
                        case_id,
                        origin: source.origin,
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            completed = report.cases.len(),
            skipped = report.skipped.len(),
            "all cases processed"
        );
        Ok(report)
    }

    /// Rank and refine a single task against the full corpus.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::InvalidTask`] if the query is blank, or any error
    /// from the ranker.
    pub async fn run_case(&self, case_id: usize, corpus: &Corpus, task: &Task) -> Result<CaseOutput> {
        if task.job_to_be_done.trim().is_empty() {
            return Err(RankError::InvalidTask(format!("case {case_id} has an empty job_to_be_done")));
        }

        info!(case_id, persona = %task.persona, "running case");
        let top_sections =
            self.ranker.rank(&corpus.pages, &task.job_to_be_done, self.config.top_k).await?;
        let sub_section_analysis = self.refiner.refine(&top_sections);

        Ok(CaseOutput {
            case_id,
            input_documents: corpus.input_documents.clone(),
            persona: task.persona.clone(),
            job_to_be_done: task.job_to_be_done.clone(),
            timestamp: Local::now().naive_local(),
            top_sections,
            sub_section_analysis,
        })
    }
}
