//! Invoice field extraction and canonical naming.

mod filename;
mod naming;
mod parser;
pub mod rules;

pub use filename::RideHailingExtractor;
pub use naming::{compose_file_name, RenamePlan};
pub use parser::{InvoiceParser, TextInvoiceParser};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
