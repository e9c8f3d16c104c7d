//! # Stronghold Legacy System Errors
//!
//! Typed failures of the explicit-dependency legacy registry: sort-time
//! errors (cycles, unregistered dependencies) and lifecycle errors from the
//! components' own `init`/`shutdown`.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LegacySystemError {
    /// Dependency cycle detected during the topological sort. Carries the
    /// dependency path ending at the repeated component.
    #[error("Circular dependency detected among legacy components: {}", .0.join(" -> "))]
    CircularDependency(Vec<String>),

    /// A declared dependency was never registered. Raised during the sort,
    /// before any component's `init` has run.
    #[error("Legacy component '{component}' depends on '{dependency}', which is not registered")]
    MissingDependency { component: String, dependency: String },

    /// A component's own `init` failed; fatal to the whole startup pass.
    #[error("Legacy component '{component}' failed to initialize: {message}")]
    InitError {
        component: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A component's own `shutdown` failed; logged and swallowed by
    /// `stop_all`, surfaced only when a component raises it directly.
    #[error("Legacy component '{component}' failed to shut down: {message}")]
    ShutdownError { component: String, message: String },

    /// A bridge setup callback failed while populating the registry.
    #[error("Legacy registry setup failed: {message}")]
    SetupError { message: String },

    /// `start_all` was requested before the bridge configured a registry.
    #[error("Legacy registry was never configured")]
    NotConfigured,
}
