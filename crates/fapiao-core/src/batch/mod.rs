//! Batch renaming of every invoice in a directory.
//!
//! Each document runs its own pipeline (read, decode, extract, compose,
//! rename). Pipelines are driven concurrently and a failure in one never
//! affects the others.

mod decoder;
mod store;

pub use decoder::{PdfTextDecoder, TextDecoder};
pub use store::{DocumentStore, FsStore};

use std::path::Path;

use chrono::{DateTime, Local};
use futures_util::future::join_all;
use tracing::{error, info, warn};

use crate::error::{DocumentError, FapiaoError};
use crate::invoice::{InvoiceParser, RenamePlan, RideHailingExtractor, TextInvoiceParser};
use crate::models::config::RenamerConfig;
use crate::models::invoice::InvoiceRecord;
use crate::Result;

/// Source of the processing time, used for synthetic codes and
/// filename-derived dates.
pub type Clock = fn() -> DateTime<Local>;

/// Outcome of one document's pipeline.
#[derive(Debug)]
pub struct DocumentOutcome {
    /// Original file name.
    pub file: String,
    /// The performed rename, or why the document was left alone.
    pub result: std::result::Result<RenamePlan, DocumentError>,
}

/// Outcomes of a batch, in directory listing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<DocumentOutcome>,
}

impl BatchReport {
    /// Whether the directory contained no qualifying documents.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn renamed(&self) -> impl Iterator<Item = &RenamePlan> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &DocumentError> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }
}

/// Renames every invoice in a directory after its extracted metadata.
pub struct BatchRenamer<S, D> {
    store: S,
    decoder: D,
    config: RenamerConfig,
    parser: TextInvoiceParser,
    ride_hailing: RideHailingExtractor,
    clock: Clock,
}

impl BatchRenamer<FsStore, PdfTextDecoder> {
    /// Renamer working on the local file system.
    pub fn for_filesystem(config: RenamerConfig) -> Self {
        Self::new(FsStore, PdfTextDecoder, config)
    }
}

impl<S: DocumentStore, D: TextDecoder> BatchRenamer<S, D> {
    pub fn new(store: S, decoder: D, config: RenamerConfig) -> Self {
        let ride_hailing = RideHailingExtractor::new(config.ride_hailing_marker.clone());
        Self {
            store,
            decoder,
            config,
            parser: TextInvoiceParser::new(),
            ride_hailing,
            clock: Local::now,
        }
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &RenamerConfig {
        &self.config
    }

    /// Process every document in `dir`.
    ///
    /// Only a failure to list the directory is returned as an error;
    /// per-document failures are logged and recorded in the report.
    pub async fn run(&self, dir: &Path) -> Result<BatchReport> {
        info!("Processing folder: {}", dir.display());

        let names = self
            .store
            .list(dir)
            .await
            .map_err(|source| FapiaoError::Listing {
                path: dir.to_path_buf(),
                source,
            })?;

        let documents: Vec<String> = names
            .into_iter()
            .filter(|name| self.config.accepts(name))
            .collect();

        if documents.is_empty() {
            info!("未找到 PDF 文件。 (No PDF files found.)");
            return Ok(BatchReport::default());
        }

        info!("Found {} documents to process", documents.len());

        let outcomes = join_all(
            documents
                .into_iter()
                .map(|file| self.process_document(dir, file)),
        )
        .await;

        Ok(BatchReport { outcomes })
    }

    async fn process_document(&self, dir: &Path, file: String) -> DocumentOutcome {
        let result = self.rename_document(dir, &file).await;

        match &result {
            Ok(plan) => info!("File renamed: {} => {}", file, plan.target_name()),
            Err(e @ DocumentError::Extraction { .. }) => {
                warn!("{}", e.diagnostic(&self.config.support_link))
            }
            Err(e) => error!("{}", e.diagnostic(&self.config.support_link)),
        }

        DocumentOutcome { file, result }
    }

    async fn rename_document(
        &self,
        dir: &Path,
        file: &str,
    ) -> std::result::Result<RenamePlan, DocumentError> {
        let record = self.extract_record(dir, file).await?;
        let plan = RenamePlan::new(dir, file, &record);

        self.store
            .rename(&plan.from, &plan.to)
            .await
            .map_err(|source| DocumentError::Rename {
                file: file.to_string(),
                target: plan.target_name(),
                source,
            })?;

        Ok(plan)
    }

    async fn extract_record(
        &self,
        dir: &Path,
        file: &str,
    ) -> std::result::Result<InvoiceRecord, DocumentError> {
        let now = (self.clock)();

        if self.ride_hailing.matches(file) {
            return self
                .ride_hailing
                .extract(file, &now)
                .map_err(|source| DocumentError::Extraction {
                    file: file.to_string(),
                    text: None,
                    source,
                });
        }

        let data = self
            .store
            .read(&dir.join(file))
            .await
            .map_err(|source| DocumentError::Read {
                file: file.to_string(),
                source,
            })?;

        let text = self
            .decoder
            .decode(data)
            .await
            .map_err(|source| DocumentError::Decode {
                file: file.to_string(),
                source,
            })?;

        match self.parser.parse(&text, &now) {
            Ok(record) => Ok(record),
            Err(source) => Err(DocumentError::Extraction {
                file: file.to_string(),
                text: Some(text),
                source,
            }),
        }
    }
}
