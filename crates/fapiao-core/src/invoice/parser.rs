//! Invoice parser working on decoded document text.

use chrono::{DateTime, Local};
use tracing::{debug, trace};

use crate::error::ExtractionError;
use crate::models::invoice::{InvoiceCode, InvoiceRecord};

use super::rules::{
    amounts::extract_total, classify, CodeExtractor, DateExtractor, FieldExtractor,
};
use super::Result;

/// Trait for invoice parsing.
pub trait InvoiceParser {
    /// Parse an invoice record from document text.
    ///
    /// `now` seeds the synthetic code when the text carries no genuine one.
    fn parse(&self, text: &str, now: &DateTime<Local>) -> Result<InvoiceRecord>;
}

/// Rule-based parser for Chinese VAT invoice text.
pub struct TextInvoiceParser {
    dates: DateExtractor,
    codes: CodeExtractor,
}

impl TextInvoiceParser {
    pub fn new() -> Self {
        Self {
            dates: DateExtractor::new(),
            codes: CodeExtractor::new(),
        }
    }
}

impl Default for TextInvoiceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceParser for TextInvoiceParser {
    fn parse(&self, text: &str, now: &DateTime<Local>) -> Result<InvoiceRecord> {
        trace!("Parsing invoice from {} characters of text", text.len());

        let date = self
            .dates
            .extract(text)
            .ok_or(ExtractionError::MissingField("date"))?;
        let amount = extract_total(text).ok_or(ExtractionError::MissingField("amount"))?;

        let code = match self.codes.extract(text) {
            Some(m) => InvoiceCode::Genuine(m.value),
            None => InvoiceCode::synthesize(now),
        };
        let kind = classify(text);

        debug!(
            "Extracted date={} ({:?}), amount={}, kind={}, code={} (synthetic: {})",
            date.value,
            date.source,
            amount,
            kind,
            code,
            code.is_synthetic()
        );

        Ok(InvoiceRecord {
            date: date.value,
            kind,
            amount: amount.round_dp(2),
            code,
        })
    }
}
