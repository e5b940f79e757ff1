//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF text extractor.
///
/// `lopdf` validates the document and strips empty-password encryption;
/// `pdf-extract` then decodes the text layer.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Invoices exported by some tax portals carry an owner password only
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::sample_pdf;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
    }

    #[test]
    fn test_extract_text_layer() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&sample_pdf("Total 123.45")).unwrap();

        let text = extractor.extract_text().unwrap();
        assert!(text.contains("123.45"), "unexpected text {:?}", text);
    }

    #[test]
    fn test_extract_without_document() {
        let extractor = PdfExtractor::new();
        assert!(matches!(extractor.extract_text(), Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfExtractor::new();
        assert!(matches!(
            extractor.load(b"mock PDF data"),
            Err(PdfError::Parse(_))
        ));
    }
}
