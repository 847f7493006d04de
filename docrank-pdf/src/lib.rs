//! PDF-to-corpus extraction for docrank.
//!
//! Produces the corpus consumed by `docrank-core`: one segment per non-empty
//! page, identified by file name and 1-based page number.

mod corpus;
mod error;
mod extractor;

pub use corpus::{build_corpus, build_corpus_with, discover_pdfs, write_corpus};
pub use error::{ExtractionError, ExtractionResult};
pub use extractor::{PageText, extract_pdf, number_pages};
