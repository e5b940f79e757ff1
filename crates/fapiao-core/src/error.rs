//! Error types for the fapiao-core library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::config::SupportLink;

/// Main error type for the fapiao library.
#[derive(Error, Debug)]
pub enum FapiaoError {
    /// The target directory could not be listed; no document was processed.
    #[error("failed to read folder {}: {source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl FapiaoError {
    /// User-facing diagnostic, pointing at the support channel.
    pub fn diagnostic(&self, support: &SupportLink) -> String {
        format!("{self}. {}", support.ask())
    }
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to invoice field extraction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractionError {
    /// Required field is missing.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse a value.
    #[error("failed to parse {field}: {value}")]
    Parse { field: &'static str, value: String },
}

/// Failure of one document's pipeline.
///
/// These never escape the document boundary: the orchestrator logs them
/// and moves on to the next document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document bytes could not be loaded.
    #[error("读取文件 {file} 时出错: {source} (Error reading file {file}: {source})")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// The document text could not be decoded.
    #[error("Error parsing PDF {file}: {source}")]
    Decode {
        file: String,
        #[source]
        source: PdfError,
    },

    /// A required field was absent; carries the decoded text for triage.
    #[error("Extraction failed for {file}: {source}")]
    Extraction {
        file: String,
        text: Option<String>,
        #[source]
        source: ExtractionError,
    },

    /// The file-system rename failed.
    #[error("Error renaming file {file}: {source}")]
    Rename {
        file: String,
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    /// Name of the document that failed.
    pub fn file(&self) -> &str {
        match self {
            Self::Read { file, .. }
            | Self::Decode { file, .. }
            | Self::Extraction { file, .. }
            | Self::Rename { file, .. } => file,
        }
    }

    /// User-facing diagnostic, pointing at the support channel.
    pub fn diagnostic(&self, support: &SupportLink) -> String {
        match self {
            Self::Extraction {
                text: Some(text), ..
            } => format!(
                "信息提取失败，文件内容如下：\n\n{text}\n请在 GitHub 上创建问题以获取帮助。 \
                 (Extraction failed, file content is as follows:\n\n{text}\n{})",
                support.ask()
            ),
            other => format!("{other}. {}", support.ask()),
        }
    }
}

/// Result type for the fapiao library.
pub type Result<T> = std::result::Result<T, FapiaoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_diagnostic_points_to_support() {
        let support = SupportLink::new("https://example.com/issues");
        let err = FapiaoError::Listing {
            path: PathBuf::from("/invoices"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        assert_eq!(
            err.diagnostic(&support),
            "failed to read folder /invoices: not found. \
             Please create an issue [here](https://example.com/issues) for assistance."
        );
    }

    #[test]
    fn test_rename_diagnostic_points_to_support() {
        let support = SupportLink::new("https://example.com/issues");
        let err = DocumentError::Rename {
            file: "invoice.pdf".to_string(),
            target: "230901_客运发票_100.00_34567890.pdf".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Rename error"),
        };

        assert_eq!(
            err.diagnostic(&support),
            "Error renaming file invoice.pdf: Rename error. \
             Please create an issue [here](https://example.com/issues) for assistance."
        );
    }

    #[test]
    fn test_extraction_diagnostic_embeds_text() {
        let support = SupportLink::new("https://example.com/issues");
        let err = DocumentError::Extraction {
            file: "scan.pdf".to_string(),
            text: Some("no totals here".to_string()),
            source: ExtractionError::MissingField("amount"),
        };

        let message = err.diagnostic(&support);
        assert_eq!(message.matches("no totals here").count(), 2);
        assert!(message.ends_with("[here](https://example.com/issues) for assistance."));
    }

    #[test]
    fn test_read_diagnostic_is_bilingual() {
        let support = SupportLink::new("https://example.com/issues");
        let err = DocumentError::Read {
            file: "a.pdf".to_string(),
            source: std::io::Error::other("File read error"),
        };

        assert_eq!(
            err.diagnostic(&support),
            "读取文件 a.pdf 时出错: File read error (Error reading file a.pdf: File read error). \
             Please create an issue [here](https://example.com/issues) for assistance."
        );
    }
}
