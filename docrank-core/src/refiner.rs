//! Condensed views of ranked segments.

use crate::config::RankConfig;
use crate::document::{RankedResult, RefinedResult};

const SENTENCE_DELIMITER: &str = ". ";

/// Derives a short extractive summary and a page caption for each result.
///
/// The summary keeps the first few `". "`-delimited fragments of the page
/// text. This is a deliberately crude baseline: abbreviations and decimals
/// split too early. Each output depends only on its own input, so results can
/// be refined in any order.
#[derive(Debug, Clone, Copy)]
pub struct ResultRefiner {
    fragments: usize,
}

impl ResultRefiner {
    /// Create a refiner keeping at most `fragments` fragments per summary.
    pub fn new(fragments: usize) -> Self {
        Self { fragments }
    }

    /// Create a refiner from the shared ranking configuration.
    pub fn from_config(config: &RankConfig) -> Self {
        Self::new(config.summary_fragments)
    }

    /// Refine every result, one output per input in the same order.
    pub fn refine(&self, ranked: &[RankedResult]) -> Vec<RefinedResult> {
        ranked
            .iter()
            .map(|result| RefinedResult {
                document: result.segment.document.clone(),
                page_number: result.segment.page_number,
                refined_text: self.summarize(&result.segment.text),
                page_number_constraints: page_caption(result.segment.page_number),
            })
            .collect()
    }

    /// Summarize a single text.
    ///
    /// Empty (or whitespace-only) text yields an empty summary; otherwise the
    /// kept fragments are rejoined with `". "` and a period is appended.
    pub fn summarize(&self, text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return String::new();
        }
        let kept: Vec<&str> = text.split(SENTENCE_DELIMITER).take(self.fragments).collect();
        format!("{}.", kept.join(SENTENCE_DELIMITER).trim())
    }
}

impl Default for ResultRefiner {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Caption naming the page a summary was taken from.
pub fn page_caption(page_number: u32) -> String {
    format!("Focused summary from page {page_number}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Segment;

    fn ranked(page: u32, text: &str) -> RankedResult {
        RankedResult {
            segment: Segment::new("doc.pdf", page, text),
            similarity_score: 0.5,
            importance_rank: page,
            section_title: "Title".into(),
        }
    }

    #[test]
    fn keeps_first_two_fragments() {
        let refiner = ResultRefiner::default();
        let summary = refiner.summarize(
            "Machine learning is a field of study. It focuses on algorithms. Other content follows.",
        );
        assert_eq!(summary, "Machine learning is a field of study. It focuses on algorithms.");
    }

    #[test]
    fn single_fragment_gets_trailing_period() {
        assert_eq!(ResultRefiner::default().summarize("No delimiter here"), "No delimiter here.");
    }

    #[test]
    fn existing_final_period_is_kept_as_is() {
        assert_eq!(ResultRefiner::default().summarize("One. Two."), "One. Two..");
    }

    #[test]
    fn empty_text_gives_empty_summary() {
        let refiner = ResultRefiner::default();
        assert_eq!(refiner.summarize(""), "");
        assert_eq!(refiner.summarize("  \n "), "");
    }

    #[test]
    fn fragment_count_is_configurable() {
        let refiner = ResultRefiner::new(1);
        assert_eq!(refiner.summarize("First. Second. Third"), "First.");
    }

    #[test]
    fn refine_is_parallel_and_pure() {
        let refiner = ResultRefiner::default();
        let input = vec![ranked(4, "Alpha. Beta. Gamma"), ranked(9, "")];

        let first = refiner.refine(&input);
        let second = refiner.refine(&input);
        assert_eq!(first, second);

        assert_eq!(first.len(), input.len());
        assert_eq!(first[0].page_number, 4);
        assert_eq!(first[0].refined_text, "Alpha. Beta.");
        assert_eq!(first[0].page_number_constraints, "Focused summary from page 4");
        assert_eq!(first[1].refined_text, "");
        assert_eq!(first[1].page_number_constraints, page_caption(9));
    }
}
