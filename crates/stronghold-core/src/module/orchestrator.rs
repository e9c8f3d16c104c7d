use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::component::ComponentRegistry;
use crate::module::error::ModuleSystemError;
use crate::module::traits::Module;
use crate::module::version::ApiVersion;

/// Drives all registered modules through the configure → start → stop
/// lifecycle.
///
/// Registration order is preserved and is the configure/start order; stop
/// runs in exact reverse. A module whose `configure` fails is excluded from
/// `start` but still receives `stop`. Start failures are logged only, a
/// deliberate asymmetry: tracking them would buy nothing, since `stop` has
/// to tolerate partially started modules either way.
pub struct ModuleOrchestrator {
    api_version: ApiVersion,
    registry: Arc<Mutex<ComponentRegistry>>,
    /// Registered modules in registration order. Duplicates are allowed;
    /// deduplication is the caller's responsibility.
    modules: Vec<Arc<dyn Module>>,
    /// Indices (not names: duplicates) of modules whose configure failed
    failed: HashSet<usize>,
}

impl ModuleOrchestrator {
    /// Create a new orchestrator for the given kernel API version, sharing
    /// the host's component registry.
    pub fn new(api_version: ApiVersion, registry: Arc<Mutex<ComponentRegistry>>) -> Self {
        Self {
            api_version,
            registry,
            modules: Vec::new(),
            failed: HashSet::new(),
        }
    }

    /// Append a module to the registration order after checking its declared
    /// API compatibility against the running kernel.
    pub fn register_module(&mut self, module: Arc<dyn Module>) -> Result<(), ModuleSystemError> {
        let host_version = self.api_version.to_semver();
        let compatible = module
            .compatible_api_versions()
            .iter()
            .any(|range| range.includes(&host_version));
        if !compatible {
            return Err(ModuleSystemError::ApiIncompatible {
                module: module.name().to_string(),
                host_version: self.api_version.to_string(),
            });
        }

        log::debug!("Registered module '{}'", module.name());
        self.modules.push(module);
        Ok(())
    }

    /// Run `configure` on every module in registration order. Failures are
    /// isolated: the module is logged, marked failed and skipped at start,
    /// and its siblings still configure.
    pub async fn configure_modules(&mut self) {
        log::info!("Configuring {} module(s)...", self.modules.len());
        let modules: Vec<(usize, Arc<dyn Module>)> =
            self.modules.iter().cloned().enumerate().collect();

        for (index, module) in modules {
            log::info!("Configuring module '{}'", module.name());
            let mut registry = self.registry.lock().await;
            if let Err(e) = module.configure(&mut registry).await {
                log::error!("Module '{}' failed to configure: {}", module.name(), e);
                self.failed.insert(index);
            }
        }
    }

    /// Run `start` on every module that configured successfully, in
    /// registration order. Start failures are logged and do not stop the
    /// remaining modules.
    pub async fn start_modules(&mut self) {
        log::info!("Starting module(s)...");
        let modules: Vec<(usize, Arc<dyn Module>)> =
            self.modules.iter().cloned().enumerate().collect();

        for (index, module) in modules {
            if self.failed.contains(&index) {
                log::warn!(
                    "Skipping start of module '{}': configuration failed",
                    module.name()
                );
                continue;
            }
            log::info!("Starting module '{}'", module.name());
            if let Err(e) = module.start().await {
                log::error!("Module '{}' failed to start: {}", module.name(), e);
            }
        }
    }

    /// Run `stop` on every registered module in reverse registration order,
    /// tolerating individual failures, then clear the module list and the
    /// component registry.
    pub async fn stop_modules(&mut self) {
        log::info!("Stopping module(s) in reverse order...");
        let modules: Vec<Arc<dyn Module>> = self.modules.iter().rev().cloned().collect();

        for module in modules {
            log::info!("Stopping module '{}'", module.name());
            if let Err(e) = module.stop().await {
                log::error!("Module '{}' failed to stop: {}", module.name(), e);
            }
        }

        self.modules.clear();
        self.failed.clear();
        self.registry.lock().await.clear();
        log::info!("All modules stopped; component registry cleared.");
    }

    /// Number of registered modules.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Names of registered modules, in registration order.
    pub fn module_names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|module| module.name()).collect()
    }

    /// Number of modules whose configure failed.
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}
