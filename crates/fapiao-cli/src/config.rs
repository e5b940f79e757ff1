//! Configuration loading.

use std::path::{Path, PathBuf};

use tracing::debug;

use fapiao_core::RenamerConfig;

/// Default location: `<config dir>/fapiao/config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fapiao")
        .join("config.json")
}

/// Load the explicit config file, else the default one if present, else
/// built-in defaults.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<RenamerConfig> {
    if let Some(path) = explicit {
        debug!("Loading config from {}", path.display());
        return Ok(RenamerConfig::from_file(path)?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        Ok(RenamerConfig::from_file(&default_path)?)
    } else {
        Ok(RenamerConfig::default())
    }
}
