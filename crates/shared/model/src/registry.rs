//! Type registry: the set of types known to the process.
//! Populated once at start-up and shared read-only afterwards.

use crate::markers::ViewModelDescriptor;
use crate::object::{Reflect, TypeInfo};
use fxhash::FxHashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// A registered type and, for view-models, its constructor.
#[derive(Debug, Clone, Copy)]
pub struct TypeEntry {
    info: TypeInfo,
    view_model: Option<ViewModelDescriptor>,
}

impl TypeEntry {
    /// Create an entry from a concrete type.
    #[must_use]
    pub fn of<T: Reflect>() -> Self {
        Self { info: T::TYPE_INFO, view_model: T::view_model() }
    }

    #[must_use]
    pub const fn info(&self) -> TypeInfo {
        self.info
    }

    #[must_use]
    pub const fn view_model(&self) -> Option<ViewModelDescriptor> {
        self.view_model
    }
}

/// Immutable, cheaply cloneable lookup of registered types by name.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: Arc<FxHashMap<&'static str, TypeEntry>>,
}

impl TypeRegistry {
    #[must_use]
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects types before freezing them into a [`TypeRegistry`].
#[derive(Debug, Default)]
pub struct TypeRegistryBuilder {
    entries: FxHashMap<&'static str, TypeEntry>,
}

impl TypeRegistryBuilder {
    /// Registers `T`. Registering the same name twice keeps the latest entry.
    #[must_use = "The builder must be finished with `build`"]
    pub fn register<T: Reflect>(mut self) -> Self {
        let entry = TypeEntry::of::<T>();
        if self.entries.insert(entry.info.name, entry).is_some() {
            warn!(type_name = entry.info.name, "Type registered twice; keeping the latest entry");
        }
        self
    }

    #[must_use]
    pub fn build(self) -> TypeRegistry {
        info!(types = self.entries.len(), "Type registry initialized");
        TypeRegistry { entries: Arc::new(self.entries) }
    }
}
