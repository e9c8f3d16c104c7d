//! # Stronghold Module System Errors
//!
//! Typed failures of module registration and of the configure/start/stop
//! lifecycle phases, as raised by modules themselves or by the
//! [`ModuleOrchestrator`](super::ModuleOrchestrator).
use thiserror::Error;

use crate::component::error::ComponentSystemError;
use crate::module::version::VersionError;

#[derive(Debug, Error)]
pub enum ModuleSystemError {
    /// The module declares no range compatible with the kernel API version.
    #[error("Module '{module}' is not compatible with kernel API version {host_version}")]
    ApiIncompatible { module: String, host_version: String },

    #[error("Module registration error for '{module}': {message}")]
    RegistrationError { module: String, message: String },

    #[error("Module '{module}' failed to configure: {message}")]
    ConfigureError {
        module: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Module '{module}' failed to start: {message}")]
    StartError {
        module: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Module '{module}' failed to stop: {message}")]
    StopError {
        module: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Component resolution failed while a module pulled its dependencies
    /// out of the registry during configure.
    #[error("Component resolution failed: {0}")]
    Component(#[from] ComponentSystemError),

    #[error("Version error: {0}")]
    Version(#[from] VersionError),
}
