//! Core library for invoice renaming.
//!
//! This crate provides:
//! - PDF text decoding
//! - Invoice field extraction (date, amount, code, type) from text or from
//!   ride-hailing invoice filenames
//! - Canonical `YYMMDD_type_amount_code.pdf` naming
//! - A batch renamer that processes a whole directory, isolating failures
//!   per document

pub mod batch;
pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;

pub use batch::{
    BatchRenamer, BatchReport, DocumentOutcome, DocumentStore, FsStore, PdfTextDecoder,
    TextDecoder,
};
pub use error::{DocumentError, ExtractionError, FapiaoError, PdfError, Result};
pub use invoice::{
    compose_file_name, InvoiceParser, RenamePlan, RideHailingExtractor, TextInvoiceParser,
};
pub use models::config::{RenamerConfig, SupportLink};
pub use models::invoice::{InvoiceCode, InvoiceKind, InvoiceRecord};
pub use pdf::{PdfExtractor, PdfProcessor};
