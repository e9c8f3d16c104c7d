//! # Stronghold Host Configuration
//!
//! TOML-backed configuration for the host process. A missing file is not an
//! error: the host runs on defaults, the same way it would with an empty
//! config.
pub mod error;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Host-level configuration loaded at bootstrap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Modules that must not be registered at all. Matched against
    /// `Module::name`.
    pub disabled_modules: Vec<String>,
    /// Log filter handed to the telemetry module (e.g. "info",
    /// "stronghold_core=debug").
    pub log_filter: Option<String>,
}

impl HostConfig {
    /// Load configuration from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!(
                "No config file at '{}', using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Persist configuration to `path` as TOML.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self)?;
        fs::write(path, raw).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether a module name is disabled by this configuration.
    pub fn is_module_disabled(&self, name: &str) -> bool {
        self.disabled_modules.iter().any(|module| module == name)
    }
}

// Test module declaration
#[cfg(test)]
mod tests;
