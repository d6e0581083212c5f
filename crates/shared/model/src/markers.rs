//! Capability markers and the view-model constructor contract.

use crate::error::ModelError;
use crate::object::{Object, Reflect, TypeInfo};
use std::sync::Arc;

/// Marker for entities that may be projected through a view-model.
///
/// Carries no behavior; it only opts a type in. `#[object(normalizable)]` implements it.
pub trait Normalizable: Object {}

/// A presentation wrapper built from exactly one entity.
///
/// Instances are created fresh for every projection, so a view-model always reflects the
/// current state of its entity.
pub trait ViewModel: Reflect {
    type Entity: Normalizable + Reflect;

    fn from_entity(entity: Arc<Self::Entity>) -> Self;
}

/// A view-model able to name its normalized output for caching layers.
///
/// The key must be deterministic for the underlying data.
pub trait CacheableViewModel: ViewModel {
    fn cache_key(&self) -> String;
}

/// Type-erased view-model constructor.
pub type ViewModelFactory = fn(Arc<dyn Object>) -> Result<Arc<dyn Object>, ModelError>;

/// Everything needed to build a view-model without knowing its type.
#[derive(Debug, Clone, Copy)]
pub struct ViewModelDescriptor {
    entity: TypeInfo,
    factory: ViewModelFactory,
}

impl ViewModelDescriptor {
    #[must_use]
    pub fn of<V: ViewModel>() -> Self {
        Self { entity: <V::Entity as Reflect>::TYPE_INFO, factory: construct::<V> }
    }

    /// The entity type the view-model expects.
    #[must_use]
    pub const fn entity(&self) -> TypeInfo {
        self.entity
    }

    /// Builds a fresh view-model around `entity`.
    ///
    /// # Errors
    /// Returns [`ModelError::EntityMismatch`] if `entity` is not the expected type.
    pub fn construct(&self, entity: Arc<dyn Object>) -> Result<Arc<dyn Object>, ModelError> {
        (self.factory)(entity)
    }
}

fn construct<V: ViewModel>(entity: Arc<dyn Object>) -> Result<Arc<dyn Object>, ModelError> {
    let actual = entity.type_info().name;
    let entity = entity.into_any().downcast::<V::Entity>().map_err(|_| {
        ModelError::EntityMismatch {
            expected: <V::Entity as Reflect>::TYPE_INFO.name,
            actual,
            context: Some(V::TYPE_INFO.name.into()),
        }
    })?;

    Ok(Arc::new(V::from_entity(entity)))
}
