use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::component::ComponentRegistry;
use crate::kernel::constants;
use crate::legacy::error::LegacySystemError;
use crate::legacy::registry::{LegacyComponentRegistry, SharedLegacyRegistry};
use crate::module::error::ModuleSystemError;
use crate::module::traits::Module;
use crate::module::version::VersionRange;

/// Callback that populates a fresh legacy registry with the feature layer's
/// components.
pub type LegacySetup =
    Box<dyn Fn(&mut LegacyComponentRegistry) -> Result<(), LegacySystemError> + Send + Sync>;

/// The single module bridging the legacy registry into the module world.
///
/// `configure` builds a fresh [`LegacyComponentRegistry`], runs every setup
/// callback against it and publishes the shared handle into the component
/// registry. A setup failure resets the internal handle before the error is
/// re-raised, so `start` can never operate on a half-built registry.
pub struct LegacyBridgeModule {
    setup: Vec<LegacySetup>,
    shared: Mutex<Option<SharedLegacyRegistry>>,
}

impl LegacyBridgeModule {
    /// Create a bridge with no registered feature components.
    pub fn new() -> Self {
        Self {
            setup: Vec::new(),
            shared: Mutex::new(None),
        }
    }

    /// Create a bridge from a prepared list of setup callbacks.
    pub fn with_setup(setup: Vec<LegacySetup>) -> Self {
        Self {
            setup,
            shared: Mutex::new(None),
        }
    }

    /// Append a setup callback. Callbacks run in insertion order during
    /// `configure`.
    pub fn add_setup<F>(&mut self, setup: F)
    where
        F: Fn(&mut LegacyComponentRegistry) -> Result<(), LegacySystemError> + Send + Sync + 'static,
    {
        self.setup.push(Box::new(setup));
    }
}

impl Default for LegacyBridgeModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for LegacyBridgeModule {
    fn name(&self) -> &'static str {
        "legacy-bridge"
    }

    fn compatible_api_versions(&self) -> Vec<VersionRange> {
        match VersionRange::from_constraint(constants::API_VERSION) {
            Ok(range) => vec![range],
            Err(e) => {
                log::error!("Failed to parse API constraint for the legacy bridge: {}", e);
                Vec::new()
            }
        }
    }

    async fn configure(&self, registry: &mut ComponentRegistry) -> Result<(), ModuleSystemError> {
        let mut legacy = LegacyComponentRegistry::new();
        for setup in &self.setup {
            if let Err(e) = setup(&mut legacy) {
                *self.shared.lock().await = None;
                return Err(ModuleSystemError::ConfigureError {
                    module: self.name().to_string(),
                    message: "legacy registry setup failed".to_string(),
                    source: Some(Box::new(e)),
                });
            }
        }

        log::info!(
            "Legacy bridge configured with {} component(s)",
            legacy.component_count()
        );
        let shared = SharedLegacyRegistry::new(legacy);
        registry.register_instance(Arc::new(shared.clone()));
        *self.shared.lock().await = Some(shared);
        Ok(())
    }

    async fn start(&self) -> Result<(), ModuleSystemError> {
        let shared = self.shared.lock().await.clone();
        match shared {
            Some(registry) => registry.start_all().await.map_err(|e| {
                ModuleSystemError::StartError {
                    module: self.name().to_string(),
                    message: "legacy startup pass failed".to_string(),
                    source: Some(Box::new(e)),
                }
            }),
            None => Err(ModuleSystemError::StartError {
                module: self.name().to_string(),
                message: LegacySystemError::NotConfigured.to_string(),
                source: Some(Box::new(LegacySystemError::NotConfigured)),
            }),
        }
    }

    async fn stop(&self) -> Result<(), ModuleSystemError> {
        let shared = self.shared.lock().await.take();
        if let Some(registry) = shared {
            registry.stop_all().await;
        }
        Ok(())
    }
}
