use async_trait::async_trait;
use log::info;

use stronghold_core::component::ComponentRegistry;
use stronghold_core::module::error::ModuleSystemError;
use stronghold_core::module::traits::Module;
use stronghold_core::module::version::VersionRange;

const COMPATIBLE_API_REQ: &str = "^0.1";

/// Core module that installs the `env_logger` backend for the `log` facade.
///
/// Registered first so every later module's configure phase already has a
/// working logger.
#[derive(Default)]
pub struct TelemetryModule {
    filter: Option<String>,
}

impl TelemetryModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit default log filter (e.g. "info",
    /// "stronghold_core=debug") instead of `RUST_LOG` alone.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
        }
    }
}

#[async_trait]
impl Module for TelemetryModule {
    fn name(&self) -> &'static str {
        "core-telemetry"
    }

    fn compatible_api_versions(&self) -> Vec<VersionRange> {
        match VersionRange::from_constraint(COMPATIBLE_API_REQ) {
            Ok(range) => vec![range],
            Err(e) => {
                log::error!(
                    "Failed to parse API version requirement ('{}') for {}: {}",
                    COMPATIBLE_API_REQ,
                    self.name(),
                    e
                );
                // Empty means incompatible, which keeps a broken constraint
                // from registering silently.
                vec![]
            }
        }
    }

    async fn configure(&self, _registry: &mut ComponentRegistry) -> Result<(), ModuleSystemError> {
        let default_filter = self.filter.as_deref().unwrap_or("info");
        let env = env_logger::Env::default().default_filter_or(default_filter);
        env_logger::Builder::from_env(env).try_init().map_err(|e| {
            let message = format!("failed to initialize env_logger: {}", e);
            ModuleSystemError::ConfigureError {
                module: self.name().to_string(),
                message,
                source: Some(Box::new(e)),
            }
        })?;
        info!("Telemetry configured (default filter: {})", default_filter);
        Ok(())
    }

    async fn start(&self) -> Result<(), ModuleSystemError> {
        info!("Telemetry module online");
        Ok(())
    }

    async fn stop(&self) -> Result<(), ModuleSystemError> {
        info!("Shutting down telemetry module");
        Ok(())
    }
}
