use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use log::info;

use core_telemetry::TelemetryModule;
use stronghold_core::component::TypeKey;
use stronghold_core::config::HostConfig;
use stronghold_core::kernel::bootstrap::Host;
use stronghold_core::kernel::constants;
use stronghold_core::legacy::bridge::LegacyBridgeModule;
use stronghold_core::legacy::component::LegacyComponent;
use stronghold_core::legacy::error::LegacySystemError;

/// Stronghold: a modular game-server feature suite host
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Simple ping command for checking the binary wiring
    #[arg(long)]
    ping: bool,

    /// Path to the host configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the modules the host registers
    Modules {},
}

// --- Legacy feature components registered through the bridge ---
// The real feature layer (quests, crafting, dungeons, ...) plugs in the same
// way; these two stand in for it until those crates are migrated.

/// Tracks how long the feature suite has been enabled.
#[derive(Default)]
struct UptimeTracker {
    started: Mutex<Option<Instant>>,
}

#[async_trait]
impl LegacyComponent for UptimeTracker {
    fn name(&self) -> &'static str {
        "uptime-tracker"
    }

    async fn init(&self) -> Result<(), LegacySystemError> {
        if let Ok(mut started) = self.started.lock() {
            *started = Some(Instant::now());
        }
        info!("Uptime tracker armed");
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), LegacySystemError> {
        if let Ok(started) = self.started.lock() {
            if let Some(instant) = *started {
                info!("Feature suite was up for {:?}", instant.elapsed());
            }
        }
        Ok(())
    }
}

/// Announces the suite to players once the tracker is armed.
struct MotdBanner;

#[async_trait]
impl LegacyComponent for MotdBanner {
    fn name(&self) -> &'static str {
        "motd-banner"
    }

    fn dependencies(&self) -> Vec<TypeKey> {
        vec![TypeKey::of::<UptimeTracker>()]
    }

    async fn init(&self) -> Result<(), LegacySystemError> {
        info!("Message of the day: the gates are open");
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), LegacySystemError> {
        info!("Message of the day: the gates are closing");
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    // Handle simple ping command
    if args.ping {
        println!("pong");
        return;
    }

    println!("Stronghold: game-server feature suite host");

    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_CONFIG_FILE));
    let config = match HostConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return;
        }
    };

    let mut host = match Host::with_config(config.clone()) {
        Ok(host) => host,
        Err(e) => {
            eprintln!("Failed to bootstrap host: {}", e);
            return;
        }
    };

    // --- Statically register core modules ---
    // Telemetry goes first so later modules configure with a live logger.
    let telemetry = match config.log_filter.as_deref() {
        Some(filter) => TelemetryModule::with_filter(filter),
        None => TelemetryModule::new(),
    };
    if let Err(e) = host.register_module(Arc::new(telemetry)) {
        eprintln!("Fatal: failed to register core-telemetry module: {}", e);
        return;
    }

    // The legacy bridge goes last so every module-provided component exists
    // before the legacy init pass runs.
    let mut bridge = LegacyBridgeModule::new();
    bridge.add_setup(|legacy| {
        legacy.register(Arc::new(UptimeTracker::default()));
        legacy.register(Arc::new(MotdBanner));
        Ok(())
    });
    if let Err(e) = host.register_module(Arc::new(bridge)) {
        eprintln!("Fatal: failed to register legacy bridge module: {}", e);
        return;
    }

    // --- Command handling ---
    if let Some(Commands::Modules {}) = args.command {
        println!("Registered modules:");
        for name in host.module_names() {
            println!("  - {}", name);
        }
        return;
    }

    println!("Enabling feature suite...");
    if let Err(e) = host.enable().await {
        eprintln!("Failed to enable host: {}", e);
        return;
    }
    println!("Feature suite enabled.");

    // Placeholder main loop; the surrounding server process normally owns
    // the time between enable and disable.
    tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;

    println!("Shutting down feature suite...");
    if let Err(e) = host.disable().await {
        eprintln!("Error while disabling host: {}", e);
    }
    println!("Feature suite disabled.");
}
