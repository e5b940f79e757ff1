//! Document text decoding for the batch renamer.

use async_trait::async_trait;

use crate::error::PdfError;
use crate::pdf::decode_text;

/// Turns raw document bytes into plain text.
#[async_trait]
pub trait TextDecoder: Send + Sync {
    async fn decode(&self, data: Vec<u8>) -> Result<String, PdfError>;
}

/// Decodes PDFs on the blocking thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextDecoder;

#[async_trait]
impl TextDecoder for PdfTextDecoder {
    async fn decode(&self, data: Vec<u8>) -> Result<String, PdfError> {
        tokio::task::spawn_blocking(move || decode_text(&data))
            .await
            .map_err(|e| PdfError::TextExtraction(format!("Task join error: {}", e)))?
    }
}
