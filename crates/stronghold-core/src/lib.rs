// Subsystem modules of the lifecycle kernel
pub mod component;
pub mod config;
pub mod kernel;
pub mod legacy;
pub mod module;

// Re-export key public types/traits for easier use by the host binary and
// by feature module crates.
pub use kernel::Host;
pub use kernel::error::{Error, Result};
pub use component::{ComponentRegistry, Initializer, TypeKey};
pub use module::{Module, ModuleOrchestrator};
pub use legacy::{LegacyBridgeModule, LegacyComponent, LegacyComponentRegistry, SharedLegacyRegistry};
pub use config::HostConfig;
