//! Binding metadata: which view-model each entity type is projected through.

use crate::binding::ViewModelBinding;
use crate::error::{ProjectionError, Result};
use fxhash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info};
use vista_model::{Normalizable, Reflect, TypeRegistry, ViewModel};

/// Source of bindings, keyed by the registered name of the entity type.
pub trait BindingLookup: Send + Sync {
    fn lookup_binding(&self, type_name: &str) -> Option<ViewModelBinding>;
}

impl<F> BindingLookup for F
where
    F: Fn(&str) -> Option<ViewModelBinding> + Send + Sync,
{
    fn lookup_binding(&self, type_name: &str) -> Option<ViewModelBinding> {
        self(type_name)
    }
}

/// Immutable binding table, built once at start-up.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    bindings: Arc<FxHashMap<&'static str, ViewModelBinding>>,
}

impl Metadata {
    /// Starts a table whose view-model names resolve against `types`.
    #[must_use]
    pub fn builder(types: &TypeRegistry) -> MetadataBuilder {
        MetadataBuilder { types: types.clone(), bindings: FxHashMap::default() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Entity type names paired with their bindings, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ViewModelBinding)> + '_ {
        self.bindings.iter().map(|(entity, binding)| (*entity, *binding))
    }
}

impl BindingLookup for Metadata {
    fn lookup_binding(&self, type_name: &str) -> Option<ViewModelBinding> {
        self.bindings.get(type_name).copied()
    }
}

/// Collects bindings, rejecting invalid ones as they are declared.
#[derive(Debug)]
pub struct MetadataBuilder {
    types: TypeRegistry,
    bindings: FxHashMap<&'static str, ViewModelBinding>,
}

impl MetadataBuilder {
    /// Binds entity `E` to the view-model registered as `view_model_type`.
    ///
    /// # Errors
    /// * [`ProjectionError::UnknownType`] / [`ProjectionError::CapabilityMismatch`] from
    ///   [`ViewModelBinding::new`].
    /// * [`ProjectionError::EntityMismatch`] if the view-model is built from another entity.
    /// * [`ProjectionError::DuplicateBinding`] if `E` is already bound.
    pub fn bind<E: Normalizable + Reflect>(self, view_model_type: &str) -> Result<Self> {
        let binding = ViewModelBinding::new(&self.types, view_model_type)?;
        self.insert(E::TYPE_INFO.name, binding)
    }

    /// Binds `V::Entity` to `V`. `V` must still be registered.
    ///
    /// # Errors
    /// * [`ProjectionError::UnknownType`] if `V` is not in the type registry.
    /// * [`ProjectionError::DuplicateBinding`] if the entity is already bound.
    pub fn bind_type<V: ViewModel>(self) -> Result<Self> {
        if !self.types.contains(V::TYPE_INFO.name) {
            return Err(ProjectionError::UnknownType {
                type_name: V::TYPE_INFO.name.to_owned(),
                context: Some("Register the view-model before binding it".into()),
            });
        }
        self.insert(<V::Entity as Reflect>::TYPE_INFO.name, ViewModelBinding::of::<V>())
    }

    #[must_use]
    pub fn build(self) -> Metadata {
        info!(bindings = self.bindings.len(), "View-model metadata initialized");
        Metadata { bindings: Arc::new(self.bindings) }
    }

    fn insert(mut self, entity: &'static str, binding: ViewModelBinding) -> Result<Self> {
        if binding.entity_type() != entity {
            return Err(ProjectionError::EntityMismatch {
                entity,
                expected: binding.entity_type(),
                view_model: binding.view_model_type(),
                context: None,
            });
        }
        if let Some(existing) = self.bindings.get(entity) {
            return Err(ProjectionError::DuplicateBinding {
                entity,
                existing: existing.view_model_type(),
                context: None,
            });
        }

        debug!(entity, view_model = binding.view_model_type(), "Bound view-model");
        self.bindings.insert(entity, binding);
        Ok(self)
    }
}
