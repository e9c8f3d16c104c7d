use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::component::error::ComponentSystemError;

/// Type-erased singleton instance as stored by the registry.
pub type SharedComponent = Arc<dyn Any + Send + Sync>;

/// Error type a build closure is allowed to fail with. The registry wraps it
/// into [`ComponentSystemError::InstantiationFailure`] naming the component.
pub type BuildError = Box<dyn std::error::Error + Send + Sync>;

type BuildFn = Box<dyn Fn(ResolvedInputs<'_>) -> Result<SharedComponent, BuildError> + Send + Sync>;

/// A `TypeId` paired with the type's name, so registry errors and log lines
/// can name the offending component instead of printing an opaque id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    pub id: TypeId,
    pub name: &'static str,
}

impl TypeKey {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }
}

/// One constructable signature for a component: the declared input types
/// plus a build closure over the resolved inputs.
///
/// Auto-wiring is driven entirely by these declarations; the registry never
/// inspects anything beyond the input list.
pub struct Initializer {
    inputs: Vec<TypeKey>,
    build: BuildFn,
}

impl Initializer {
    pub fn builder() -> InitializerBuilder {
        InitializerBuilder { inputs: Vec::new() }
    }

    /// Number of declared inputs; used to pick the richest signature.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }
}

/// Builder collecting the declared inputs of an [`Initializer`] in order.
pub struct InitializerBuilder {
    inputs: Vec<TypeKey>,
}

impl InitializerBuilder {
    /// Declare the next required input type, in position order.
    pub fn input<T: Send + Sync + 'static>(mut self) -> Self {
        self.inputs.push(TypeKey::of::<T>());
        self
    }

    /// Finish with the build closure. The closure receives the inputs
    /// resolved in declaration order and returns the new component value.
    pub fn build<T, F>(self, construct: F) -> Initializer
    where
        T: Send + Sync + 'static,
        F: Fn(ResolvedInputs<'_>) -> Result<T, BuildError> + Send + Sync + 'static,
    {
        Initializer {
            inputs: self.inputs,
            build: Box::new(move |inputs| {
                construct(inputs).map(|value| Arc::new(value) as SharedComponent)
            }),
        }
    }
}

/// View over the resolved inputs handed to a build closure.
pub struct ResolvedInputs<'a> {
    owner: &'static str,
    values: &'a [SharedComponent],
}

impl ResolvedInputs<'_> {
    /// Downcast the input at `index` (declaration order) to its concrete type.
    pub fn get<T: Send + Sync + 'static>(&self, index: usize) -> Result<Arc<T>, ComponentSystemError> {
        let mismatch = || ComponentSystemError::InputTypeMismatch {
            type_name: self.owner,
            index,
            expected: std::any::type_name::<T>(),
        };
        let value = self.values.get(index).ok_or_else(|| mismatch())?;
        value.clone().downcast::<T>().map_err(|_| mismatch())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Singleton component registry with lazy, declaration-driven construction.
///
/// Three pieces of state, per the kernel's resolution model: the
/// authoritative instance cache, the subset of instances that were supplied
/// pre-built by callers, and the transient set of types currently mid
/// construction (cycle detection only).
#[derive(Default)]
pub struct ComponentRegistry {
    /// Authoritative cache: one instance per type for the process lifetime
    instances: HashMap<TypeId, SharedComponent>,
    /// Pre-built values supplied via `register_instance`
    explicit: HashMap<TypeId, SharedComponent>,
    /// Declared initializer signatures, in declaration order per type
    initializers: HashMap<TypeId, Vec<Initializer>>,
    /// Types whose construction is on the current resolution call stack
    constructing: HashSet<TypeId>,
    /// Diagnostic names for every type the registry has seen
    names: HashMap<TypeId, &'static str>,
}

impl ComponentRegistry {
    /// Create a new empty component registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pre-built instance. Last write wins: replacing any
    /// existing instance (explicit or constructed) is allowed but warned
    /// about, never an error.
    pub fn register_instance<T: Send + Sync + 'static>(&mut self, instance: Arc<T>) {
        let key = TypeKey::of::<T>();
        let shared: SharedComponent = instance;
        if self.instances.insert(key.id, shared.clone()).is_some() {
            log::warn!(
                "Component '{}' was already registered; replacing the previous instance",
                key.name
            );
        }
        self.explicit.insert(key.id, shared);
        self.names.insert(key.id, key.name);
    }

    /// Declare an initializer signature for `T`. A type may carry several;
    /// `get` picks the one with the most inputs, ties broken by declaration
    /// order.
    pub fn register_initializer<T: Send + Sync + 'static>(&mut self, initializer: Initializer) {
        let key = TypeKey::of::<T>();
        self.names.insert(key.id, key.name);
        self.initializers.entry(key.id).or_default().push(initializer);
    }

    /// Get the singleton instance of `T`, constructing it (and, recursively,
    /// its declared inputs) on first use.
    pub fn get<T: Send + Sync + 'static>(&mut self) -> Result<Arc<T>, ComponentSystemError> {
        let key = TypeKey::of::<T>();
        let shared = self.resolve(key)?;
        shared
            .downcast::<T>()
            .map_err(|_| ComponentSystemError::TypeMismatch { type_name: key.name })
    }

    /// Get the cached instance of `T` without triggering construction.
    pub fn get_cached<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.instances
            .get(&TypeId::of::<T>())
            .and_then(|shared| shared.clone().downcast::<T>().ok())
    }

    /// Whether an instance of `T` is currently cached.
    pub fn has<T: Send + Sync + 'static>(&self) -> bool {
        self.instances.contains_key(&TypeId::of::<T>())
    }

    /// Whether the cached instance of `T` was supplied pre-built.
    pub fn is_explicit<T: Send + Sync + 'static>(&self) -> bool {
        self.explicit.contains_key(&TypeId::of::<T>())
    }

    /// Number of cached instances.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Drop all instances, explicit registrations and initializers.
    pub fn clear(&mut self) {
        self.instances.clear();
        self.explicit.clear();
        self.initializers.clear();
        self.constructing.clear();
        self.names.clear();
    }

    fn resolve(&mut self, key: TypeKey) -> Result<SharedComponent, ComponentSystemError> {
        if let Some(existing) = self.instances.get(&key.id) {
            return Ok(existing.clone());
        }
        if self.constructing.contains(&key.id) {
            return Err(ComponentSystemError::CircularDependency { type_name: key.name });
        }

        self.constructing.insert(key.id);
        let result = self.construct(key);
        // Invariant: a type stays in `constructing` only for the duration of
        // its own resolution call, on success and failure alike.
        self.constructing.remove(&key.id);

        let instance = result?;
        self.instances.insert(key.id, instance.clone());
        self.names.insert(key.id, key.name);
        Ok(instance)
    }

    fn construct(&mut self, key: TypeKey) -> Result<SharedComponent, ComponentSystemError> {
        let chosen = self.choose_initializer(key)?;
        let inputs: Vec<TypeKey> = match self.initializers.get(&key.id).and_then(|list| list.get(chosen)) {
            Some(initializer) => initializer.inputs.clone(),
            None => return Err(ComponentSystemError::NoInitializer { type_name: key.name }),
        };

        let mut values = Vec::with_capacity(inputs.len());
        for input in &inputs {
            values.push(self.resolve(*input)?);
        }

        let initializer = match self.initializers.get(&key.id).and_then(|list| list.get(chosen)) {
            Some(initializer) => initializer,
            None => return Err(ComponentSystemError::NoInitializer { type_name: key.name }),
        };
        (initializer.build)(ResolvedInputs {
            owner: key.name,
            values: &values,
        })
        .map_err(|source| ComponentSystemError::InstantiationFailure {
            type_name: key.name,
            source,
        })
    }

    /// Pick the richest declared signature: most inputs wins, ties go to the
    /// earliest declaration. A deliberate simplicity trade-off, not scoring.
    fn choose_initializer(&self, key: TypeKey) -> Result<usize, ComponentSystemError> {
        let list = self
            .initializers
            .get(&key.id)
            .filter(|list| !list.is_empty())
            .ok_or(ComponentSystemError::NoInitializer { type_name: key.name })?;

        let mut chosen = 0;
        for (index, candidate) in list.iter().enumerate().skip(1) {
            if candidate.input_count() > list[chosen].input_count() {
                chosen = index;
            }
        }
        Ok(chosen)
    }
}
