//! # Stronghold Legacy Component System
//!
//! Feature components that predate the module abstraction declare their
//! dependencies as explicit type lists instead of initializer inputs. This
//! subsystem keeps them running: a registry performing a depth-first
//! topological sort with cycle detection and a two-phase init/shutdown
//! lifecycle, plus the single bridge module that plugs the whole thing into
//! the module orchestrator.
//!
//! ## Key Submodules:
//!
//! - **[`component`]**: the [`LegacyComponent`] contract (declared
//!   dependencies, capabilities, init/shutdown).
//! - **[`registry`]**: [`LegacyComponentRegistry`] and its shared handle
//!   [`SharedLegacyRegistry`].
//! - **[`bridge`]**: [`LegacyBridgeModule`], configure-time construction and
//!   publication of the registry.
//! - **[`error`]**: typed legacy system errors.
pub mod bridge;
pub mod component;
pub mod error;
pub mod registry;

pub use bridge::{LegacyBridgeModule, LegacySetup};
pub use component::LegacyComponent;
pub use error::LegacySystemError;
pub use registry::{LegacyComponentRegistry, SharedLegacyRegistry};
