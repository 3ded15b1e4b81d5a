//! Configuration loading.
//!
//! Two entry points with different failure contracts: [`from_toml_path`] is
//! strict and surfaces I/O and validation errors to the caller;
//! [`load_config`] is lenient and degrades to defaults with a warning, for
//! hosts where a broken config file must never block feed generation.

use std::fs;
use std::path::Path;

use super::{EngineConfig, HeatWeights};
use crate::core::errors::{Error, Result};

/// Parse and validate configuration from a TOML string.
///
/// Invalid heat weights are recoverable: they are replaced with defaults
/// (with a warning) and the rest of the document is kept. Any other
/// validation failure is a hard error.
pub fn from_toml_str(contents: &str) -> Result<EngineConfig> {
    let mut config: EngineConfig = toml::from_str(contents)?;

    if let Err(reason) = config.heat.weights.validate() {
        log::warn!("Invalid heat weights: {}. Using default weights.", reason);
        config.heat.weights = HeatWeights::default();
    }
    config.heat.weights.normalize();

    config.validate().map_err(Error::Config)?;
    Ok(config)
}

/// Read, parse, and validate configuration from a TOML file.
pub fn from_toml_path(path: &Path) -> Result<EngineConfig> {
    let contents = fs::read_to_string(path)?;
    from_toml_str(&contents)
}

/// Load configuration from an optional path, degrading to defaults.
///
/// A missing path, a missing file, and an invalid file all yield
/// [`EngineConfig::default`]; only genuine read or parse problems warn.
pub fn load_config(path: Option<&Path>) -> EngineConfig {
    let Some(path) = path else {
        log::debug!("No config path given; using default configuration");
        return EngineConfig::default();
    };

    match from_toml_path(path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            config
        }
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config file at {}; using defaults", path.display());
            EngineConfig::default()
        }
        Err(e) => {
            log::warn!(
                "Failed to load config from {}: {}. Using defaults.",
                path.display(),
                e
            );
            EngineConfig::default()
        }
    }
}
