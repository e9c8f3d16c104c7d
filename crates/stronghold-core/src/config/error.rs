use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or saving the host configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error while accessing config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}
