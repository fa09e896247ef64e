//! PDF document processor

use std::io::Write;

use askpdf_core::{DocumentProcessor, Error, Result, Segment};

/// Document processor for PDF bytes
///
/// The parser wants a file path, so the bytes go through a `.pdf`-suffixed
/// temp file whose guard removes it on drop, whether parsing succeeds or
/// fails.
pub struct PdfProcessor;

impl PdfProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProcessor for PdfProcessor {
    fn process(&self, bytes: &[u8]) -> Result<Vec<Segment>> {
        let mut tmp = tempfile::Builder::new()
            .prefix("askpdf_")
            .suffix(".pdf")
            .tempfile()?;
        tmp.write_all(bytes)?;
        tmp.flush()?;

        let text = pdf_extract::extract_text(tmp.path())
            .map_err(|e| Error::DocumentProcessing(e.to_string()))?;

        Ok(segments_from_text(&text))
    }
}

/// Split extracted text into per-page segments
///
/// Extraction returns the whole document as one string with form feed
/// characters separating pages. Pages whose trimmed text is empty are
/// dropped, so an all-whitespace or image-only PDF yields an empty Vec.
fn segments_from_text(text: &str) -> Vec<Segment> {
    text.split('\x0C')
        .enumerate()
        .filter(|(_, page_text)| !page_text.trim().is_empty())
        .map(|(i, page_text)| Segment {
            id: format!("page_{}", i + 1),
            text: page_text.trim().to_string(),
            page: i + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_pages_on_form_feed() {
        let segments = segments_from_text("first page\x0Csecond page\x0Cthird page");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "first page");
        assert_eq!(segments[1].page, 2);
        assert_eq!(segments[2].id, "page_3");
    }

    #[test]
    fn drops_blank_pages_but_keeps_page_numbers() {
        let segments = segments_from_text("intro\x0C   \n\t \x0Cconclusion");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].page, 1);
        assert_eq!(segments[1].page, 3);
    }

    #[test]
    fn whitespace_only_text_yields_no_segments() {
        assert!(segments_from_text("  \n \x0C \t ").is_empty());
        assert!(segments_from_text("").is_empty());
    }

    #[test]
    fn single_page_without_separator() {
        let segments = segments_from_text("  The capital of France is Paris.  ");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "The capital of France is Paris.");
        assert_eq!(segments[0].page, 1);
    }

    #[test]
    fn corrupt_bytes_fail_with_processing_error() {
        let processor = PdfProcessor::new();
        let err = processor.process(b"this is not a pdf").unwrap_err();
        assert!(matches!(err, Error::DocumentProcessing(_)));
    }
}
