//! Typed loading of corpus and task files.
//!
//! Both formats are deserialized with serde and then validated, so a missing
//! field or an impossible value becomes a [`RankError::CorpusLoad`] or
//! [`RankError::TaskLoad`] instead of a silently defaulted value.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::document::{Corpus, Task};
use crate::error::{RankError, Result};

/// File name prefix of task files picked up by [`discover_task_files`].
pub const TASK_FILE_PREFIX: &str = "persona_task_";

/// Load and validate a corpus file.
///
/// # Errors
///
/// Returns [`RankError::CorpusLoad`] if the file cannot be read, is not valid
/// corpus JSON, contains a page number of 0, or repeats a page within one
/// document.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Corpus> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| corpus_error(path, e))?;
    let corpus = parse_corpus(&content).map_err(|message| corpus_error(path, message))?;
    info!(
        path = %path.display(),
        documents = corpus.input_documents.len(),
        pages = corpus.pages.len(),
        "loaded corpus"
    );
    Ok(corpus)
}

/// Parse and validate corpus JSON. The error is a human-readable reason.
pub fn parse_corpus(content: &str) -> std::result::Result<Corpus, String> {
    let corpus: Corpus = serde_json::from_str(content).map_err(|e| e.to_string())?;

    let mut seen = HashSet::new();
    for page in &corpus.pages {
        if page.page_number == 0 {
            return Err(format!("page_number must be 1-based (document '{}')", page.document));
        }
        if !seen.insert((page.document.as_str(), page.page_number)) {
            return Err(format!(
                "duplicate page {} for document '{}'",
                page.page_number, page.document
            ));
        }
    }
    Ok(corpus)
}

/// Load a single task file.
///
/// A blank `job_to_be_done` is accepted here; the orchestrator rejects it
/// per task so the remaining tasks still run.
///
/// # Errors
///
/// Returns [`RankError::TaskLoad`] if the file cannot be read or lacks a
/// string `job_to_be_done` or `persona`.
pub fn load_task(path: impl AsRef<Path>) -> Result<Task> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| task_error(path, e))?;
    let task: Task = serde_json::from_str(&content).map_err(|e| task_error(path, e))?;
    debug!(path = %path.display(), persona = %task.persona, "loaded task");
    Ok(task)
}

/// Find `persona_task_*.json` files directly inside `dir`, sorted by name.
///
/// # Errors
///
/// Returns [`RankError::TaskLoad`] if `dir` is not a readable directory.
pub fn discover_task_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(task_error(dir, "task directory does not exist"));
    }

    let mut files = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry.file_name().to_str().is_some_and(|name| {
                name.starts_with(TASK_FILE_PREFIX) && name.ends_with(".json")
            })
        })
        .map(|entry| entry.into_path())
        .collect::<Vec<_>>();

    files.sort();
    Ok(files)
}

fn corpus_error(path: &Path, message: impl ToString) -> RankError {
    RankError::CorpusLoad { path: path.to_path_buf(), message: message.to_string() }
}

fn task_error(path: &Path, message: impl ToString) -> RankError {
    RankError::TaskLoad { path: path.to_path_buf(), message: message.to_string() }
}
