//! Canonical filename composition.

use std::path::{Path, PathBuf};

use crate::models::invoice::InvoiceRecord;

/// Compose `<YYMMDD>_<type>_<amount>_<code suffix>.pdf` for a record.
///
/// Two documents with the same date, type, amount and code suffix get the
/// same name; the later rename replaces the earlier file.
pub fn compose_file_name(record: &InvoiceRecord) -> String {
    format!(
        "{}_{}_{}_{}.pdf",
        record.date.format("%y%m%d"),
        record.kind,
        record.amount_text(),
        record.code.suffix()
    )
}

/// A rename about to be performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// Current path of the document.
    pub from: PathBuf,
    /// Canonical path in the same directory.
    pub to: PathBuf,
}

impl RenamePlan {
    pub fn new(dir: &Path, file_name: &str, record: &InvoiceRecord) -> Self {
        Self {
            from: dir.join(file_name),
            to: dir.join(compose_file_name(record)),
        }
    }

    /// New file name, without the directory.
    pub fn target_name(&self) -> String {
        self.to
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
