use crate::error::{ProjectionError, Result};
use std::sync::Arc;
use vista_model::{
    Capabilities, ModelError, Object, Reflect, TypeInfo, TypeRegistry, ViewModel,
    ViewModelDescriptor,
};

/// Declares that an entity type is projected through one view-model type.
///
/// Validated once when declared, immutable afterwards.
#[derive(Debug, Clone, Copy)]
pub struct ViewModelBinding {
    view_model: TypeInfo,
    descriptor: ViewModelDescriptor,
}

impl ViewModelBinding {
    /// Binds to the view-model registered under `view_model_type`.
    ///
    /// # Errors
    /// * [`ProjectionError::UnknownType`] if no such type is registered.
    /// * [`ProjectionError::CapabilityMismatch`] if the type is not a view-model.
    pub fn new(types: &TypeRegistry, view_model_type: &str) -> Result<Self> {
        let entry = types.lookup(view_model_type).ok_or_else(|| ProjectionError::UnknownType {
            type_name: view_model_type.to_owned(),
            context: None,
        })?;

        let info = entry.info();
        match entry.view_model() {
            Some(descriptor) if info.capabilities.contains(Capabilities::VIEW_MODEL) => {
                Ok(Self { view_model: info, descriptor })
            },
            _ => Err(ProjectionError::CapabilityMismatch { type_name: info.name, context: None }),
        }
    }

    /// Binding checked by the compiler instead of the registry.
    #[must_use]
    pub fn of<V: ViewModel>() -> Self {
        Self { view_model: V::TYPE_INFO, descriptor: ViewModelDescriptor::of::<V>() }
    }

    /// Registered name of the view-model type.
    #[must_use]
    pub const fn view_model_type(&self) -> &'static str {
        self.view_model.name
    }

    /// Registered name of the entity type the view-model is built from.
    #[must_use]
    pub const fn entity_type(&self) -> &'static str {
        self.descriptor.entity().name
    }

    /// Builds a fresh view-model around `entity`.
    ///
    /// # Errors
    /// [`ModelError::EntityMismatch`] if `entity` is not the type the view-model expects.
    pub fn construct(&self, entity: Arc<dyn Object>) -> Result<Arc<dyn Object>, ModelError> {
        self.descriptor.construct(entity)
    }
}
