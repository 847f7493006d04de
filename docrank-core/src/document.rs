//! Data types for corpus segments, tasks, and per-case results.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One page's extracted text from one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segment {
    /// Identifier of the source document (the PDF file name).
    pub document: String,
    /// 1-based page number within the document.
    pub page_number: u32,
    /// Raw extracted page text.
    pub text: String,
}

impl Segment {
    /// Create a new segment.
    pub fn new(document: impl Into<String>, page_number: u32, text: impl Into<String>) -> Self {
        Self { document: document.into(), page_number, text: text.into() }
    }
}

/// The flat segment collection produced by the extractor, plus the list of
/// documents it was built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Corpus {
    /// Every document that was processed, including ones with no text.
    pub input_documents: Vec<String>,
    /// Page segments in extraction order.
    pub pages: Vec<Segment>,
}

impl Corpus {
    /// Create a corpus from its parts.
    pub fn new(input_documents: Vec<String>, pages: Vec<Segment>) -> Self {
        Self { input_documents, pages }
    }

    /// Whether the corpus holds no segments at all.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// A single ranking run: a persona and the job they want done.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// The free-text query.
    pub job_to_be_done: String,
    /// Description of who is asking.
    pub persona: String,
}

impl Task {
    /// Create a new task.
    pub fn new(job_to_be_done: impl Into<String>, persona: impl Into<String>) -> Self {
        Self { job_to_be_done: job_to_be_done.into(), persona: persona.into() }
    }
}

/// A [`Segment`] scored against one task's query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedResult {
    /// The scored segment.
    #[serde(flatten)]
    pub segment: Segment,
    /// Cosine similarity to the query, rounded to 4 decimal places.
    pub similarity_score: f64,
    /// 1-based position in the task's result list.
    pub importance_rank: u32,
    /// First short line of the segment text, or `"Unknown"`.
    pub section_title: String,
}

/// A condensed view of a [`RankedResult`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefinedResult {
    /// Identifier of the source document.
    pub document: String,
    /// 1-based page number within the document.
    pub page_number: u32,
    /// Extractive summary of the page text.
    pub refined_text: String,
    /// Human-readable caption derived from the page number.
    pub page_number_constraints: String,
}

/// The complete record produced for one task.
///
/// `top_sections` and `sub_section_analysis` always have the same length and
/// index `i` in both refers to the same segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseOutput {
    /// 1-based position of the task in the run. Not part of the file body;
    /// it only names the output file.
    #[serde(skip)]
    pub case_id: usize,
    pub input_documents: Vec<String>,
    pub persona: String,
    pub job_to_be_done: String,
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub top_sections: Vec<RankedResult>,
    pub sub_section_analysis: Vec<RefinedResult>,
}

/// `YYYY-MM-DD HH:MM:SS` (local wall-clock, no zone).
mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
