//! # Stronghold Kernel
//!
//! The kernel ties the lifecycle machinery together: it bootstraps the
//! host, owns the shared component registry, and drives all registered
//! modules through configure → start → stop in a deterministic,
//! single-control-thread order.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Host Bootstrapping**: [`Host`](bootstrap::Host) constructs the
//!   registry and orchestrator and exposes enable/disable to the process
//!   entry point.
//! - **Core Constants**: system-wide constants via the `constants`
//!   submodule.
//! - **Error Handling**: the umbrella [`Error`](error::Error) type and
//!   `Result` alias in the `error` submodule.
pub mod bootstrap;
pub mod constants;
pub mod error;

pub use bootstrap::Host;
pub use error::{Error, KernelLifecyclePhase, Result};

// Test module declaration
#[cfg(test)]
mod tests;
