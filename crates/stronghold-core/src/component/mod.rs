//! # Stronghold Component System
//!
//! The component registry is the kernel's singleton store: one instance per
//! component type, created either eagerly (pre-built values pushed in by a
//! module's configure phase) or lazily through declared initializers that
//! the registry resolves recursively (auto-wiring).
//!
//! ## Key Submodules:
//!
//! - **[`registry`]**: [`ComponentRegistry`], [`Initializer`] and the
//!   resolution algorithm, including construction-cycle detection.
//! - **[`error`]**: [`ComponentSystemError`](error::ComponentSystemError),
//!   the typed failures of registration and resolution.
pub mod error;
pub mod registry;

pub use registry::{
    BuildError, ComponentRegistry, Initializer, InitializerBuilder, ResolvedInputs,
    SharedComponent, TypeKey,
};

// Test module declaration
#[cfg(test)]
mod tests;
