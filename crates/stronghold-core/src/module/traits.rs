use async_trait::async_trait;

use crate::component::ComponentRegistry;
use crate::module::error::ModuleSystemError;
use crate::module::version::VersionRange;

/// Core trait that all feature modules must implement.
///
/// A module bundles one feature area (quests, crafting, dungeons, ...) and
/// exposes the three lifecycle callbacks the orchestrator drives. Lifecycle
/// state is tracked by the orchestrator, never by the module itself.
#[async_trait]
pub trait Module: Send + Sync {
    /// The name of the module, used in log output and for configuration
    /// lookups
    fn name(&self) -> &'static str;

    /// Kernel API versions this module can run against. A module with no
    /// range matching the running kernel is rejected at registration.
    fn compatible_api_versions(&self) -> Vec<VersionRange>;

    /// Register the module's own components into the registry. Pulling
    /// dependencies out of the registry here may trigger auto-wired
    /// construction of other modules' components.
    async fn configure(&self, registry: &mut ComponentRegistry) -> Result<(), ModuleSystemError>;

    /// Perform side-effecting startup, such as registering event handlers
    /// or spawning background loops.
    async fn start(&self) -> Result<(), ModuleSystemError>;

    /// Release resources. Called in reverse registration order for every
    /// registered module, including modules whose `configure` or `start`
    /// failed, so implementations must tolerate partial setup.
    async fn stop(&self) -> Result<(), ModuleSystemError>;
}
