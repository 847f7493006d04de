use std::fs;
use std::path::{Path, PathBuf};

use docrank_core::{Corpus, Segment};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::{ExtractionError, ExtractionResult};
use crate::extractor::{PageText, extract_pdf};

/// PDF files directly inside `dir`, sorted by path.
pub fn discover_pdfs(dir: impl AsRef<Path>) -> ExtractionResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ExtractionError::MissingInputDir(dir.to_path_buf()));
    }

    let mut files = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry.path().extension().is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .map(|entry| entry.into_path())
        .collect::<Vec<_>>();

    files.sort();
    Ok(files)
}

/// Extract every PDF in `dir` into a corpus.
///
/// Documents are identified by file name. A PDF that fails to extract is
/// logged and left out of both `input_documents` and `pages`.
pub fn build_corpus(dir: impl AsRef<Path>) -> ExtractionResult<Corpus> {
    build_corpus_with(dir, |path| extract_pdf(path))
}

/// [`build_corpus`] with a custom per-file extractor.
pub fn build_corpus_with<F>(dir: impl AsRef<Path>, mut extract: F) -> ExtractionResult<Corpus>
where
    F: FnMut(&Path) -> ExtractionResult<Vec<PageText>>,
{
    let mut corpus = Corpus::default();

    for path in discover_pdfs(dir)? {
        let document = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match extract(&path) {
            Ok(pages) => {
                info!(document = %document, pages = pages.len(), "extracted document");
                corpus.pages.extend(
                    pages
                        .into_iter()
                        .map(|page| Segment::new(document.clone(), page.page_number, page.text)),
                );
                corpus.input_documents.push(document);
            }
            Err(e) => warn!(document = %document, error = %e, "skipping unreadable pdf"),
        }
    }

    Ok(corpus)
}

/// Write `corpus` as pretty-printed JSON.
pub fn write_corpus(corpus: &Corpus, path: impl AsRef<Path>) -> ExtractionResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(corpus)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|source| ExtractionError::Io { path: parent.to_path_buf(), source })?;
    }
    fs::write(path, json).map_err(|source| ExtractionError::Io { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), pages = corpus.pages.len(), "wrote corpus");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovers_pdfs_case_insensitively_and_sorted() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("b.PDF"), b"").unwrap();
        fs::write(root.join("a.pdf"), b"").unwrap();
        fs::write(root.join("notes.txt"), b"").unwrap();

        let files = discover_pdfs(root).unwrap();
        let names: Vec<_> =
            files.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect();
        assert_eq!(names, ["a.pdf", "b.PDF"]);
    }

    #[test]
    fn missing_dir_is_reported() {
        let temp = tempfile::tempdir().unwrap();
        let err = discover_pdfs(temp.path().join("input_pdfs")).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingInputDir(_)));
    }
}
