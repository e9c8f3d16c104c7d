//! # Stronghold Component System Errors
//!
//! Error types raised by the [`ComponentRegistry`](super::ComponentRegistry)
//! while registering instances or lazily constructing components through
//! their declared initializers.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComponentSystemError {
    /// A component transitively depends on itself; detected against the
    /// in-progress construction set.
    #[error("Circular dependency detected while constructing component '{type_name}'")]
    CircularDependency { type_name: &'static str },

    /// `get` was called for a type that has neither a cached instance nor a
    /// registered initializer.
    #[error("No initializer registered for component '{type_name}'")]
    NoInitializer { type_name: &'static str },

    /// The component's own build closure failed.
    #[error("Component '{type_name}' failed to instantiate")]
    InstantiationFailure {
        type_name: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A build closure asked for an input under a type that does not match
    /// the initializer's declared input at that position.
    #[error("Initializer input {index} of component '{type_name}' does not match the declared type '{expected}'")]
    InputTypeMismatch {
        type_name: &'static str,
        index: usize,
        expected: &'static str,
    },

    /// The instance stored under this type's key could not be downcast back
    /// to it. Indicates a mismatched registration.
    #[error("Component '{type_name}' is registered under a different concrete type")]
    TypeMismatch { type_name: &'static str },
}
