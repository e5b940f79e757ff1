//! Invoice type classification against the label catalog.

use crate::models::invoice::InvoiceKind;

/// Classify a document by the first catalog label found in its text.
///
/// Catalog order decides ties: a text mentioning both 餐饮 and 客运 is a
/// catering invoice.
pub fn classify(text: &str) -> InvoiceKind {
    InvoiceKind::CATALOG
        .into_iter()
        .find(|kind| kind.keyword().is_some_and(|keyword| text.contains(keyword)))
        .unwrap_or(InvoiceKind::Unclassified)
}
