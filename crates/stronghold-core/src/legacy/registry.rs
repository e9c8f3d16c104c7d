use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::component::TypeKey;
use crate::legacy::component::LegacyComponent;
use crate::legacy::error::LegacySystemError;

/// Registry for pre-module feature components with declared dependencies.
///
/// `start_all` performs a depth-first topological sort over the declared
/// dependency lists (cycle detection via an in-path recursion guard, missing
/// dependencies fail fast) and only then runs `init` in the computed order.
/// `stop_all` runs `shutdown` in reverse and clears the registry entirely;
/// restarting requires full re-registration.
#[derive(Default)]
pub struct LegacyComponentRegistry {
    /// Components keyed by their concrete type
    components: HashMap<TypeId, Arc<dyn LegacyComponent>>,
    /// Capability key -> concrete type of the first registrant
    aliases: HashMap<TypeId, TypeId>,
    /// Diagnostic names for registered types
    names: HashMap<TypeId, &'static str>,
    /// Registration order, kept for deterministic sort traversal
    registration_order: Vec<TypeId>,
    /// Topological order computed by the last `start_all` call
    order: Vec<TypeId>,
    /// Prefix of `order` whose `init` actually ran; drives `stop_all`
    initialized: Vec<TypeId>,
}

impl LegacyComponentRegistry {
    /// Create a new empty legacy registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under its own type and under each capability it
    /// satisfies (first registrant wins per capability). Re-registering a
    /// concrete type replaces the previous instance with a warning.
    pub fn register<C: LegacyComponent>(&mut self, component: Arc<C>) {
        let id = TypeId::of::<C>();
        let name = component.name();
        let capabilities = component.capabilities();

        if self.components.insert(id, component).is_some() {
            log::warn!(
                "Legacy component '{}' was already registered; replacing the previous instance",
                name
            );
        } else {
            self.registration_order.push(id);
        }
        self.names.insert(id, name);

        for capability in capabilities {
            self.aliases.entry(capability.id).or_insert(id);
        }
    }

    /// Look a component up by its concrete type or by a capability it
    /// satisfies.
    pub fn get_by_key(&self, key: TypeId) -> Option<Arc<dyn LegacyComponent>> {
        self.resolve_key(key)
            .and_then(|id| self.components.get(&id).cloned())
    }

    /// Look a component up and downcast it to its concrete type.
    pub fn get_concrete<C: LegacyComponent>(&self) -> Option<Arc<C>> {
        self.components.get(&TypeId::of::<C>()).and_then(|component| {
            let as_any: Arc<dyn Any + Send + Sync> = component.clone();
            Arc::downcast::<C>(as_any).ok()
        })
    }

    /// Whether a concrete type or capability resolves to a registered
    /// component.
    pub fn is_registered(&self, key: TypeId) -> bool {
        self.resolve_key(key).is_some()
    }

    /// Number of registered components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Number of components whose `init` has run.
    pub fn initialized_count(&self) -> usize {
        self.initialized.len()
    }

    /// Names in the topological order computed by the last `start_all`.
    pub fn init_order(&self) -> Vec<&'static str> {
        self.order.iter().map(|id| self.display_name(*id)).collect()
    }

    /// Topologically sort all registered components, then run `init` on each
    /// in dependency order. The full order is computed before any `init`
    /// runs, so sort-time failures never leave components half started. An
    /// `init` failure is logged and re-raised, aborting the remaining inits.
    pub async fn start_all(&mut self) -> Result<(), LegacySystemError> {
        let order = self.compute_order()?;
        log::info!(
            "Legacy init order: [{}]",
            order
                .iter()
                .map(|id| self.display_name(*id))
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.order = order.clone();
        self.initialized.clear();

        for id in order {
            let Some(component) = self.components.get(&id).cloned() else {
                continue;
            };
            log::info!("Initializing legacy component '{}'", component.name());
            if let Err(e) = component.init().await {
                log::error!(
                    "Legacy component '{}' failed to initialize, aborting startup: {}",
                    component.name(),
                    e
                );
                return Err(e);
            }
            self.initialized.push(id);
        }
        Ok(())
    }

    /// Run `shutdown` in reverse init order, tolerating and logging
    /// individual failures, then clear the registry entirely.
    pub async fn stop_all(&mut self) {
        let to_stop: Vec<Arc<dyn LegacyComponent>> = self
            .initialized
            .iter()
            .rev()
            .filter_map(|id| self.components.get(id).cloned())
            .collect();

        for component in to_stop {
            log::info!("Shutting down legacy component '{}'", component.name());
            if let Err(e) = component.shutdown().await {
                log::error!(
                    "Legacy component '{}' failed to shut down: {}",
                    component.name(),
                    e
                );
            }
        }

        self.components.clear();
        self.aliases.clear();
        self.names.clear();
        self.registration_order.clear();
        self.order.clear();
        self.initialized.clear();
    }

    fn resolve_key(&self, key: TypeId) -> Option<TypeId> {
        if self.components.contains_key(&key) {
            Some(key)
        } else {
            self.aliases.get(&key).copied()
        }
    }

    fn display_name(&self, id: TypeId) -> &'static str {
        self.names.get(&id).copied().unwrap_or("<unknown>")
    }

    /// Depth-first topological sort over registration order.
    fn compute_order(&self) -> Result<Vec<TypeId>, LegacySystemError> {
        let mut visited = HashSet::new();
        let mut in_path = HashSet::new();
        let mut path = Vec::new();
        let mut order = Vec::new();

        for id in &self.registration_order {
            if !visited.contains(id) {
                self.visit(*id, &mut visited, &mut in_path, &mut path, &mut order)?;
            }
        }
        Ok(order)
    }

    fn visit(
        &self,
        id: TypeId,
        visited: &mut HashSet<TypeId>,
        in_path: &mut HashSet<TypeId>,
        path: &mut Vec<&'static str>,
        order: &mut Vec<TypeId>,
    ) -> Result<(), LegacySystemError> {
        // Raised the moment a repeat is seen, not after full traversal
        if in_path.contains(&id) {
            let mut cycle: Vec<String> = path.iter().map(|name| name.to_string()).collect();
            cycle.push(self.display_name(id).to_string());
            return Err(LegacySystemError::CircularDependency(cycle));
        }
        if visited.contains(&id) {
            return Ok(());
        }

        let Some(component) = self.components.get(&id) else {
            // Only reachable for registration-order roots, which are always
            // present; dependencies are checked by name below.
            return Ok(());
        };

        in_path.insert(id);
        path.push(self.display_name(id));

        for dependency in component.dependencies() {
            let Some(resolved) = self.resolve_key(dependency.id) else {
                return Err(LegacySystemError::MissingDependency {
                    component: self.display_name(id).to_string(),
                    dependency: dependency.name.to_string(),
                });
            };
            self.visit(resolved, visited, in_path, path, order)?;
        }

        path.pop();
        in_path.remove(&id);
        visited.insert(id);
        order.push(id);
        Ok(())
    }
}

/// Shared, thread-safe handle to a [`LegacyComponentRegistry`]. This is the
/// value the bridge module publishes into the component registry.
#[derive(Clone)]
pub struct SharedLegacyRegistry {
    registry: Arc<Mutex<LegacyComponentRegistry>>,
}

impl SharedLegacyRegistry {
    /// Wrap a populated registry.
    pub fn new(registry: LegacyComponentRegistry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
        }
    }

    /// Access the underlying registry handle.
    pub fn registry(&self) -> Arc<Mutex<LegacyComponentRegistry>> {
        Arc::clone(&self.registry)
    }

    pub async fn start_all(&self) -> Result<(), LegacySystemError> {
        self.registry.lock().await.start_all().await
    }

    pub async fn stop_all(&self) {
        self.registry.lock().await.stop_all().await
    }

    pub async fn component_count(&self) -> usize {
        self.registry.lock().await.component_count()
    }
}

impl std::fmt::Debug for SharedLegacyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedLegacyRegistry").finish_non_exhaustive()
    }
}
