use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::component::ComponentRegistry;
use crate::config::HostConfig;
use crate::kernel::constants;
use crate::kernel::error::{Error, KernelLifecyclePhase, Result};
use crate::module::orchestrator::ModuleOrchestrator;
use crate::module::traits::Module;
use crate::module::version::ApiVersion;

/// Top-level host coordinating the component registry and the module
/// orchestrator.
///
/// The process entry point constructs a `Host`, registers all modules in a
/// fixed order, and calls [`enable`](Host::enable) / [`disable`](Host::disable)
/// when the surrounding server turns the feature suite on and off.
pub struct Host {
    config: HostConfig,
    enabled: bool,
    registry: Arc<Mutex<ComponentRegistry>>,
    orchestrator: ModuleOrchestrator,
}

impl Host {
    /// Creates a new host with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(HostConfig::default())
    }

    /// Creates a new host with the given configuration.
    pub fn with_config(config: HostConfig) -> Result<Self> {
        log::info!("Bootstrapping {} v{}", constants::APP_NAME, constants::APP_VERSION);

        let api_version = ApiVersion::from_str(constants::API_VERSION).map_err(|e| {
            Error::Lifecycle {
                phase: KernelLifecyclePhase::Bootstrap,
                message: format!("failed to parse API_VERSION constant: {}", e),
            }
        })?;

        let registry = Arc::new(Mutex::new(ComponentRegistry::new()));
        let orchestrator = ModuleOrchestrator::new(api_version, Arc::clone(&registry));

        Ok(Self {
            config,
            enabled: false,
            registry,
            orchestrator,
        })
    }

    /// Register a module. Modules disabled by configuration are skipped with
    /// a log line; incompatible API declarations are rejected.
    pub fn register_module(&mut self, module: Arc<dyn Module>) -> Result<()> {
        if self.config.is_module_disabled(module.name()) {
            log::info!(
                "Module '{}' is disabled by configuration, skipping registration",
                module.name()
            );
            return Ok(());
        }
        self.orchestrator.register_module(module)?;
        Ok(())
    }

    /// Enable the feature suite: configure all modules in registration
    /// order, then start the ones that configured cleanly.
    pub async fn enable(&mut self) -> Result<()> {
        if self.enabled {
            return Err(Error::Lifecycle {
                phase: KernelLifecyclePhase::Configure,
                message: "host is already enabled".to_string(),
            });
        }

        self.orchestrator.configure_modules().await;
        if self.orchestrator.failed_count() > 0 {
            log::warn!(
                "{} module(s) failed to configure and will not be started",
                self.orchestrator.failed_count()
            );
        }
        self.orchestrator.start_modules().await;

        self.enabled = true;
        log::info!("{} enabled.", constants::APP_NAME);
        Ok(())
    }

    /// Disable the feature suite: stop all modules in reverse registration
    /// order and clear the component registry. A no-op when not enabled.
    pub async fn disable(&mut self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        self.orchestrator.stop_modules().await;
        self.enabled = false;
        log::info!("{} disabled.", constants::APP_NAME);
        Ok(())
    }

    /// Gets a cached component instance by its concrete type.
    pub async fn get_component<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.registry.lock().await.get_cached::<T>()
    }

    /// Shared handle to the component registry.
    pub fn registry(&self) -> Arc<Mutex<ComponentRegistry>> {
        Arc::clone(&self.registry)
    }

    /// Returns whether the host is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of registered modules.
    pub fn module_count(&self) -> usize {
        self.orchestrator.module_count()
    }

    /// Names of registered modules, in registration order.
    pub fn module_names(&self) -> Vec<&'static str> {
        self.orchestrator.module_names()
    }

    /// The active host configuration.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }
}
