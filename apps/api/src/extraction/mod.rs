//! Document Extractor — turns an uploaded résumé PDF into plain text.
//!
//! Only the first page is decoded. A multi-page résumé is truncated to page 1;
//! later pages are never read.

use bytes::Bytes;
use pdf_extract::Document;
use tracing::{debug, error};

use crate::errors::EvaluationError;

#[cfg(test)]
pub mod fixtures;

/// Extracts the text of the first page of `document`.
///
/// `None` means nothing was uploaded. Bytes that are not a PDF, or a PDF with an
/// empty page tree, fail with `DocumentParse`. A first page with no text yields
/// an empty string.
pub fn extract_first_page(document: Option<&[u8]>) -> Result<String, EvaluationError> {
    let bytes = document.ok_or(EvaluationError::MissingInput)?;

    let doc = Document::load_mem(bytes)
        .map_err(|e| EvaluationError::DocumentParse(e.to_string()))?;

    // Page numbers are 1-based; the lowest one is page index 0.
    let first_page = doc
        .get_pages()
        .keys()
        .next()
        .copied()
        .ok_or_else(|| EvaluationError::DocumentParse("document has no pages".to_string()))?;

    let text = doc
        .extract_text(&[first_page])
        .map_err(|e| EvaluationError::DocumentParse(e.to_string()))?;

    debug!(
        "Extracted {} chars from page {first_page} of a {}-byte PDF",
        text.len(),
        bytes.len()
    );
    Ok(text)
}

/// Runs `extract_first_page` on the blocking pool.
///
/// The PDF decoder can panic on malformed input; a panicked task is reported as
/// `DocumentParse` like any other unreadable document.
pub async fn extract_first_page_blocking(document: Option<Bytes>) -> Result<String, EvaluationError> {
    let bytes = document.ok_or(EvaluationError::MissingInput)?;

    tokio::task::spawn_blocking(move || extract_first_page(Some(&bytes[..])))
        .await
        .map_err(|e| {
            error!("PDF extraction task failed: {e}");
            EvaluationError::DocumentParse("the PDF could not be decoded".to_string())
        })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::fixtures::{empty_pdf, pdf_with_pages, pdf_with_untyped_font};

    #[test]
    fn test_single_page_text_is_extracted() {
        let pdf = pdf_with_pages(&["5 years Go experience"]);
        let text = extract_first_page(Some(pdf.as_slice())).unwrap();
        assert!(text.contains("5 years Go experience"));
    }

    #[test]
    fn test_later_pages_are_never_read() {
        let pdf = pdf_with_pages(&["Page one summary", "Page two references"]);
        let text = extract_first_page(Some(pdf.as_slice())).unwrap();
        assert!(text.contains("Page one summary"));
        assert!(!text.contains("Page two references"));
    }

    #[test]
    fn test_missing_document_is_missing_input() {
        let err = extract_first_page(None).unwrap_err();
        assert!(matches!(err, EvaluationError::MissingInput));
    }

    #[test]
    fn test_corrupted_bytes_fail_to_parse() {
        let err = extract_first_page(Some(b"this is not a pdf".as_slice())).unwrap_err();
        assert!(matches!(err, EvaluationError::DocumentParse(_)));
    }

    #[test]
    fn test_zero_page_pdf_fails_to_parse() {
        let pdf = empty_pdf();
        let err = extract_first_page(Some(pdf.as_slice())).unwrap_err();
        assert!(matches!(err, EvaluationError::DocumentParse(_)));
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let pdf = pdf_with_pages(&["Rust, Go, Kubernetes"]);
        let first = extract_first_page(Some(pdf.as_slice())).unwrap();
        let second = extract_first_page(Some(pdf.as_slice())).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_blocking_extraction_returns_first_page() {
        let pdf = Bytes::from(pdf_with_pages(&["Kubernetes", "Hobbies"]));
        let text = extract_first_page_blocking(Some(pdf)).await.unwrap();
        assert!(text.contains("Kubernetes"));
        assert!(!text.contains("Hobbies"));
    }

    #[tokio::test]
    async fn test_blocking_extraction_without_document_is_missing_input() {
        let err = extract_first_page_blocking(None).await.unwrap_err();
        assert!(matches!(err, EvaluationError::MissingInput));
    }

    // The decoder's font-type check is a debug assertion.
    #[cfg(debug_assertions)]
    #[tokio::test]
    async fn test_malformed_font_dictionary_is_parse_error() {
        let pdf = Bytes::from(pdf_with_untyped_font("5 years Go experience"));
        let err = extract_first_page_blocking(Some(pdf)).await.unwrap_err();
        assert!(matches!(err, EvaluationError::DocumentParse(_)));
    }
}
