//! Invoice code extraction.

use super::patterns::INVOICE_CODE;
use super::{ExtractionMatch, FieldExtractor};

/// Extracts 20-digit invoice codes.
///
/// The first 20 consecutive digits match, even when they open a longer run.
pub struct CodeExtractor;

impl CodeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CodeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CodeExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        INVOICE_CODE.find(text).map(to_match)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        INVOICE_CODE.find_iter(text).map(to_match).collect()
    }
}

fn to_match(m: regex::Match<'_>) -> ExtractionMatch<String> {
    ExtractionMatch::new(m.as_str().to_string(), m.as_str()).with_position(m.start(), m.end())
}
