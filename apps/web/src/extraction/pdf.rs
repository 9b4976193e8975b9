use lopdf::Document;
use tracing::debug;

use crate::extraction::ExtractionError;

/// Loads the document, opening it with the empty user password when it is
/// encrypted. A document that needs a real password is a parse error.
fn load_document(bytes: &[u8]) -> Result<Document, ExtractionError> {
    let mut doc = Document::load_mem(bytes)
        .map_err(|e| ExtractionError::PdfParse(format!("failed to load document: {e}")))?;

    if doc.is_encrypted() {
        doc.decrypt("").map_err(|e| {
            debug!(error = %e, "Encrypted PDF does not open with an empty password");
            ExtractionError::PdfParse("document is encrypted".to_string())
        })?;
    }

    Ok(doc)
}

/// Extracts text page by page, in page order. Pages whose content cannot be
/// decoded contribute an empty string rather than failing the document.
pub fn extract_pdf_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let doc = load_document(bytes)?;

    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(ExtractionError::PdfParse("document has no pages".to_string()));
    }

    // get_pages() is a BTreeMap keyed by 1-based page number.
    let texts = pages
        .keys()
        .map(|page_num| match doc.extract_text(&[*page_num]) {
            Ok(text) => text,
            Err(e) => {
                debug!(page = page_num, error = %e, "No extractable text on page");
                String::new()
            }
        })
        .collect();

    Ok(texts)
}

/// Whole-document extraction with pdf-extract, which understands more font
/// encodings than the per-page pass.
pub fn extract_whole_document(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::PdfParse(format!("fallback extraction failed: {e}")))
}

/// Concatenates the text of every page. When no page yields text, retries
/// the whole document with [`extract_whole_document`].
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = extract_pdf_pages(bytes)?;
    join_or_fallback(pages, || extract_whole_document(bytes))
}

fn join_or_fallback<F>(pages: Vec<String>, fallback: F) -> Result<String, ExtractionError>
where
    F: FnOnce() -> Result<String, ExtractionError>,
{
    let text = pages.concat();
    if !text.trim().is_empty() {
        return Ok(text);
    }

    debug!("No page yielded text, trying whole-document extraction");
    fallback()
}


#[cfg(test)]
mod tests {
    use super::fixtures::{build_pdf, save, user_password_pdf};
    use super::*;
    use crate::demo::generate_demo_resume;

    #[test]
    fn test_garbage_is_parse_error() {
        let err = extract_pdf_pages(b"%PDF-1.4\nnot really").unwrap_err();
        assert!(matches!(err, ExtractionError::PdfParse(_)));
    }

    #[test]
    fn test_demo_resume_has_one_page_of_text() {
        let bytes = generate_demo_resume().unwrap();
        let pages = extract_pdf_pages(&bytes).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("John Doe"), "page text was {:?}", pages[0]);
    }

    #[test]
    fn test_demo_resume_text_lists_skills_line() {
        let bytes = generate_demo_resume().unwrap();
        let text = extract_pdf_text(&bytes).unwrap();
        assert!(text.contains("Software Engineer"), "text was {text:?}");
        assert!(text.contains("Python"), "text was {text:?}");
    }

    #[test]
    fn test_pages_are_joined_in_order_and_blank_page_adds_nothing() {
        let bytes = save(build_pdf(&["first python", "", "third docker"]));

        let pages = extract_pdf_pages(&bytes).unwrap();
        assert_eq!(pages.len(), 3);
        assert!(pages[1].trim().is_empty(), "blank page gave {:?}", pages[1]);

        let text = extract_pdf_text(&bytes).unwrap();
        assert_eq!(text, pages.concat());
        let first = text.find("first python").unwrap();
        let third = text.find("third docker").unwrap();
        assert!(first < third, "text was {text:?}");
    }

    #[test]
    fn test_user_password_pdf_is_parse_error() {
        let bytes = user_password_pdf();
        let err = extract_pdf_text(&bytes).unwrap_err();
        assert!(matches!(err, ExtractionError::PdfParse(_)));
        assert_eq!(err.code(), "PDF_PARSE_ERROR");
        assert!(err.to_string().contains("encrypted"), "error was {err}");
    }

    #[test]
    fn test_fallback_used_only_when_pages_are_empty() {
        let text = join_or_fallback(vec!["a ".into(), "b".into()], || {
            panic!("fallback must not run when pages have text")
        })
        .unwrap();
        assert_eq!(text, "a b");

        let text =
            join_or_fallback(vec![String::new(), "  \n".into()], || Ok("whole".to_string()))
                .unwrap();
        assert_eq!(text, "whole");
    }

    #[test]
    fn test_failing_fallback_is_parse_error() {
        let err = join_or_fallback(vec![String::new()], || {
            Err(ExtractionError::PdfParse("no text".to_string()))
        })
        .unwrap_err();
        assert!(matches!(err, ExtractionError::PdfParse(_)));
    }

    #[test]
    fn test_whole_document_extraction_reads_demo() {
        let bytes = generate_demo_resume().unwrap();
        let text = extract_whole_document(&bytes).unwrap();
        assert!(text.contains("John"), "text was {text:?}");
    }
}
