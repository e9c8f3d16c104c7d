use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;

use crate::component::{ComponentRegistry, Initializer};
use crate::config::HostConfig;
use crate::kernel::bootstrap::Host;
use crate::kernel::error::Error;
use crate::legacy::bridge::LegacyBridgeModule;
use crate::legacy::component::LegacyComponent;
use crate::legacy::error::LegacySystemError;
use crate::module::error::ModuleSystemError;
use crate::module::traits::Module;
use crate::module::version::VersionRange;

type Events = Arc<StdMutex<Vec<String>>>;

// --- A small real module wiring a component through the registry ---

#[derive(Debug)]
struct ArenaBoard {
    rounds: u32,
}

struct ArenaModule {
    events: Events,
}

#[async_trait]
impl Module for ArenaModule {
    fn name(&self) -> &'static str {
        "arena"
    }

    fn compatible_api_versions(&self) -> Vec<VersionRange> {
        vec![VersionRange::from_constraint("^0.1").unwrap()]
    }

    async fn configure(&self, registry: &mut ComponentRegistry) -> Result<(), ModuleSystemError> {
        self.events.lock().unwrap().push("configure:arena".to_string());
        registry.register_initializer::<ArenaBoard>(
            Initializer::builder().build(|_inputs| Ok(ArenaBoard { rounds: 3 })),
        );
        // Pull it straight back out: configure-time resolution must work.
        let board = registry.get::<ArenaBoard>()?;
        assert_eq!(board.rounds, 3);
        Ok(())
    }

    async fn start(&self) -> Result<(), ModuleSystemError> {
        self.events.lock().unwrap().push("start:arena".to_string());
        Ok(())
    }

    async fn stop(&self) -> Result<(), ModuleSystemError> {
        self.events.lock().unwrap().push("stop:arena".to_string());
        Ok(())
    }
}

struct BrokenModule {
    events: Events,
}

#[async_trait]
impl Module for BrokenModule {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn compatible_api_versions(&self) -> Vec<VersionRange> {
        vec![VersionRange::from_constraint("^0.1").unwrap()]
    }

    async fn configure(&self, _registry: &mut ComponentRegistry) -> Result<(), ModuleSystemError> {
        self.events.lock().unwrap().push("configure:broken".to_string());
        Err(ModuleSystemError::ConfigureError {
            module: "broken".to_string(),
            message: "intentional".to_string(),
            source: None,
        })
    }

    async fn start(&self) -> Result<(), ModuleSystemError> {
        self.events.lock().unwrap().push("start:broken".to_string());
        Ok(())
    }

    async fn stop(&self) -> Result<(), ModuleSystemError> {
        self.events.lock().unwrap().push("stop:broken".to_string());
        Ok(())
    }
}

struct FutureModule;

#[async_trait]
impl Module for FutureModule {
    fn name(&self) -> &'static str {
        "future"
    }
    fn compatible_api_versions(&self) -> Vec<VersionRange> {
        vec![VersionRange::from_constraint("^9").unwrap()]
    }
    async fn configure(&self, _registry: &mut ComponentRegistry) -> Result<(), ModuleSystemError> {
        Ok(())
    }
    async fn start(&self) -> Result<(), ModuleSystemError> {
        Ok(())
    }
    async fn stop(&self) -> Result<(), ModuleSystemError> {
        Ok(())
    }
}

struct Lantern {
    events: Events,
}

#[async_trait]
impl LegacyComponent for Lantern {
    fn name(&self) -> &'static str {
        "lantern"
    }
    async fn init(&self) -> Result<(), LegacySystemError> {
        self.events.lock().unwrap().push("init:lantern".to_string());
        Ok(())
    }
    async fn shutdown(&self) -> Result<(), LegacySystemError> {
        self.events.lock().unwrap().push("stop:lantern".to_string());
        Ok(())
    }
}

fn events_tracker() -> Events {
    Arc::new(StdMutex::new(Vec::new()))
}

#[tokio::test]
async fn full_enable_disable_lifecycle() {
    let events = events_tracker();
    let mut host = Host::new().expect("Host::new failed");
    host.register_module(Arc::new(ArenaModule { events: events.clone() }))
        .unwrap();
    host.register_module(Arc::new(BrokenModule { events: events.clone() }))
        .unwrap();

    assert!(!host.is_enabled());
    host.enable().await.expect("enable failed");
    assert!(host.is_enabled());

    // The arena module's component is visible through the host.
    let board = host.get_component::<ArenaBoard>().await;
    assert!(board.is_some(), "ArenaBoard should be cached after configure");

    host.disable().await.expect("disable failed");
    assert!(!host.is_enabled());

    // Registry is cleared on disable.
    assert!(host.get_component::<ArenaBoard>().await.is_none());
    assert_eq!(host.module_count(), 0);

    let recorded = events.lock().unwrap().clone();
    assert_eq!(
        recorded,
        vec![
            "configure:arena",
            "configure:broken",
            "start:arena",
            "stop:broken",
            "stop:arena",
        ],
        "broken module must skip start, still stop, and stop order must reverse"
    );
}

#[tokio::test]
async fn enable_twice_is_an_error() {
    let mut host = Host::new().expect("Host::new failed");
    host.enable().await.expect("first enable failed");
    let err = host.enable().await.expect_err("second enable must fail");
    assert!(matches!(err, Error::Lifecycle { .. }));
}

#[tokio::test]
async fn disable_without_enable_is_a_noop() {
    let mut host = Host::new().expect("Host::new failed");
    host.disable().await.expect("disable should be a no-op");
    assert!(!host.is_enabled());
}

#[tokio::test]
async fn configuration_can_disable_modules() {
    let events = events_tracker();
    let config = HostConfig {
        disabled_modules: vec!["arena".to_string()],
        ..HostConfig::default()
    };
    let mut host = Host::with_config(config).expect("Host::with_config failed");

    host.register_module(Arc::new(ArenaModule { events: events.clone() }))
        .unwrap();
    assert_eq!(host.module_count(), 0, "disabled module must not register");

    host.enable().await.expect("enable failed");
    assert!(events.lock().unwrap().is_empty());
    host.disable().await.expect("disable failed");
}

#[tokio::test]
async fn incompatible_module_is_rejected() {
    let mut host = Host::new().expect("Host::new failed");
    let err = host
        .register_module(Arc::new(FutureModule))
        .expect_err("registration must fail");
    assert!(matches!(
        err,
        Error::ModuleSystem(ModuleSystemError::ApiIncompatible { .. })
    ));
}

#[tokio::test]
async fn bridge_runs_legacy_components_inside_host_lifecycle() {
    let events = events_tracker();
    let mut host = Host::new().expect("Host::new failed");

    let mut bridge = LegacyBridgeModule::new();
    let setup_events = events.clone();
    bridge.add_setup(move |legacy| {
        legacy.register(Arc::new(Lantern {
            events: setup_events.clone(),
        }));
        Ok(())
    });
    host.register_module(Arc::new(ArenaModule { events: events.clone() }))
        .unwrap();
    host.register_module(Arc::new(bridge)).unwrap();

    host.enable().await.expect("enable failed");
    host.disable().await.expect("disable failed");

    let recorded = events.lock().unwrap().clone();
    assert_eq!(
        recorded,
        vec![
            "configure:arena",
            "start:arena",
            "init:lantern",
            "stop:lantern",
            "stop:arena",
        ],
        "legacy init happens during bridge start and reverses before earlier modules stop"
    );
}
