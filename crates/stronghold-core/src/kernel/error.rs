//! # Stronghold Kernel Errors
//!
//! Defines [`Error`], the umbrella error type for the lifecycle kernel.
//! Subsystem errors ([`ComponentSystemError`], [`ModuleSystemError`],
//! [`LegacySystemError`], [`ConfigError`]) convert into it via `#[from]`,
//! so `?` works across subsystem boundaries.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::component::error::ComponentSystemError;
use crate::config::error::ConfigError;
use crate::legacy::error::LegacySystemError;
use crate::module::error::ModuleSystemError;

/// Top-level error type for the Stronghold kernel
#[derive(Debug, ThisError)]
pub enum Error {
    /// Typed component registry / auto-wiring error
    #[error("Component system error: {0}")]
    ComponentSystem(#[from] ComponentSystemError),

    /// Typed module orchestration error
    #[error("Module system error: {0}")]
    ModuleSystem(#[from] ModuleSystemError),

    /// Typed legacy registry error
    #[error("Legacy system error: {0}")]
    LegacySystem(#[from] LegacySystemError),

    /// Host configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error occurring during a specific kernel lifecycle phase
    #[error("Kernel lifecycle error during {phase}: {message}")]
    Lifecycle {
        phase: KernelLifecyclePhase,
        message: String,
    },

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Represents a specific phase in the kernel's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum KernelLifecyclePhase {
    #[error("Bootstrap")]
    Bootstrap,
    #[error("Configure")]
    Configure,
    #[error("Start")]
    Start,
    #[error("Shutdown")]
    Shutdown,
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}
