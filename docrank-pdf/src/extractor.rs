use std::path::Path;

use tracing::debug;

use crate::error::{ExtractionError, ExtractionResult};

/// Text of one PDF page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 1-based page number in the source PDF.
    pub page_number: u32,
    /// Trimmed page text. Never empty.
    pub text: String,
}

/// Extract the text of every non-empty page of a PDF.
pub fn extract_pdf(path: impl AsRef<Path>) -> ExtractionResult<Vec<PageText>> {
    let path = path.as_ref();
    let pages = pdf_extract::extract_text_by_pages(path).map_err(|e| {
        let message = e.to_string();
        let lower = message.to_lowercase();
        if lower.contains("password") || lower.contains("encrypted") {
            ExtractionError::PasswordProtected(path.to_path_buf())
        } else if lower.contains("invalid") || lower.contains("malformed") || lower.contains("corrupt")
        {
            ExtractionError::Corrupted(path.to_path_buf())
        } else {
            ExtractionError::Read { path: path.to_path_buf(), message }
        }
    })?;

    let pages = number_pages(pages);
    debug!(path = %path.display(), pages = pages.len(), "extracted pdf text");
    Ok(pages)
}

/// Number extracted pages from 1 and drop the blank ones.
///
/// Blank pages still count towards numbering, so page numbers match the
/// source PDF.
pub fn number_pages<S: AsRef<str>>(pages: impl IntoIterator<Item = S>) -> Vec<PageText> {
    pages
        .into_iter()
        .zip(1u32..)
        .filter_map(|(page, page_number)| {
            let text = page.as_ref().trim();
            (!text.is_empty()).then(|| PageText { page_number, text: text.to_string() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

    /// Write a PDF with one page per entry; `None` leaves the page blank.
    fn write_pdf(path: &Path, pages: &[Option<&str>]) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let operations = match text {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => Vec::new(),
            };
            let content = Content { operations }.encode().unwrap();
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn every_pdf_page_gets_its_own_number() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("guide.pdf");
        write_pdf(&path, &[Some("Introduction"), Some("Packing list"), Some("Itinerary")]);

        let pages = extract_pdf(&path).unwrap();
        let numbers: Vec<u32> = pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, [1, 2, 3]);
        assert!(pages[0].text.contains("Introduction"));
        assert!(pages[1].text.contains("Packing list"));
        assert!(pages[2].text.contains("Itinerary"));
    }

    #[test]
    fn blank_pdf_page_is_skipped_without_renumbering() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("guide.pdf");
        write_pdf(&path, &[Some("Cover"), None, Some("Contents")]);

        let pages = extract_pdf(&path).unwrap();
        let numbers: Vec<u32> = pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, [1, 3]);
        assert!(pages[1].text.contains("Contents"));
    }

    #[test]
    fn numbers_pages_from_one() {
        let pages = number_pages(["Intro", "Chapter one", "Chapter two"]);
        let numbers: Vec<u32> = pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, [1, 2, 3]);
        assert_eq!(pages[1].text, "Chapter one");
    }

    #[test]
    fn blank_pages_keep_numbering() {
        let pages = number_pages(["Cover\n", "  \n ", "\tContent "]);
        assert_eq!(
            pages,
            [
                PageText { page_number: 1, text: "Cover".into() },
                PageText { page_number: 3, text: "Content".into() },
            ]
        );
    }

    #[test]
    fn no_pages_means_no_text() {
        assert!(number_pages(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.pdf");
        std::fs::write(&path, b"not a pdf").unwrap();
        assert!(extract_pdf(&path).is_err());
    }
}
