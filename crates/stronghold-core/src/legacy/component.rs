use std::any::Any;

use async_trait::async_trait;

use crate::component::TypeKey;
use crate::legacy::error::LegacySystemError;

/// Contract for pre-module feature components.
///
/// Unlike modules, legacy components declare their dependencies as an
/// explicit list of type keys, read once at sort time; nothing is inferred.
/// The registry drives them through a two-phase lifecycle: `init` in
/// topological order, `shutdown` in reverse.
#[async_trait]
pub trait LegacyComponent: Any + Send + Sync {
    /// The name of the component, used in log output and error messages
    fn name(&self) -> &'static str;

    /// Declared dependencies: the components that must initialize first.
    /// Every entry must be registered, or `start_all` fails fast.
    fn dependencies(&self) -> Vec<TypeKey> {
        Vec::new()
    }

    /// Capability groupings this component satisfies. The registry indexes
    /// the component under each of these keys as well, first registrant
    /// wins, so lookups can use an abstraction instead of the concrete type.
    fn capabilities(&self) -> Vec<TypeKey> {
        Vec::new()
    }

    /// Initialize the component. A failure here aborts the remaining inits.
    async fn init(&self) -> Result<(), LegacySystemError>;

    /// Shut the component down. Failures are logged and swallowed.
    async fn shutdown(&self) -> Result<(), LegacySystemError>;
}
