//! Configuration structures for the renaming pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::FapiaoError;

/// Main configuration for the fapiao pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamerConfig {
    /// Where users are sent when a document cannot be processed.
    pub support_link: SupportLink,

    /// Filename substring identifying the ride-hailing invoice family.
    pub ride_hailing_marker: String,

    /// Document extension (compared case-insensitively, without the dot).
    pub extension: String,
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            support_link: SupportLink::default(),
            ride_hailing_marker: "高德打车电子发票".to_string(),
            extension: "pdf".to_string(),
        }
    }
}

impl RenamerConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, FapiaoError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FapiaoError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), FapiaoError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| FapiaoError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Whether a file name carries the configured document extension.
    pub fn accepts(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }
}

/// Link to the support channel, appended to every user diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportLink(String);

impl SupportLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }

    /// Sentence asking the user to report the problem.
    pub fn ask(&self) -> String {
        format!("Please create an issue [here]({}) for assistance.", self.0)
    }
}

impl Default for SupportLink {
    fn default() -> Self {
        Self::new("https://github.com/example/fapiao/issues")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accepts_extension_case_insensitively() {
        let config = RenamerConfig::default();

        assert!(config.accepts("invoice.pdf"));
        assert!(config.accepts("INVOICE.PDF"));
        assert!(!config.accepts("invoice.txt"));
        assert!(!config.accepts("pdf"));
        assert!(!config.accepts(".pdf"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: RenamerConfig =
            serde_json::from_str(r#"{"support_link": "https://example.com/help"}"#).unwrap();

        assert_eq!(config.support_link.url(), "https://example.com/help");
        assert_eq!(config.ride_hailing_marker, "高德打车电子发票");
        assert_eq!(config.extension, "pdf");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = RenamerConfig {
            ride_hailing_marker: "滴滴出行电子发票".to_string(),
            ..RenamerConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(RenamerConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            RenamerConfig::from_file(&path),
            Err(FapiaoError::Config(_))
        ));
    }
}
