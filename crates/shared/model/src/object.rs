use crate::capabilities::Capabilities;
use crate::error::ModelError;
use crate::markers::ViewModelDescriptor;
use crate::proxy::Proxy;
use crate::value::Field;
use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// Static identity of a type as seen by the normalizer chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// Registered type name, unique per process.
    pub name: &'static str,
    pub capabilities: Capabilities,
}

impl TypeInfo {
    #[must_use]
    pub const fn new(name: &'static str, capabilities: Capabilities) -> Self {
        Self { name, capabilities }
    }

    #[must_use]
    pub const fn is_normalizable(&self) -> bool {
        self.capabilities.contains(Capabilities::NORMALIZABLE)
    }

    #[must_use]
    pub const fn is_view_model(&self) -> bool {
        self.capabilities.contains(Capabilities::VIEW_MODEL)
    }
}

/// A value the normalizer chain can inspect.
///
/// Usually implemented by `#[object]`; hand-written impls are expected for wrappers such as
/// [`LazyProxy`](crate::LazyProxy).
pub trait Object: Any + Debug + Send + Sync {
    /// Type identity of this value. Proxies report their own type here.
    fn type_info(&self) -> TypeInfo;

    /// Reads every exposed accessor, in declaration order.
    ///
    /// # Errors
    /// Returns [`ModelError`] when the value cannot be materialized (e.g. a proxy fails to load).
    fn fields(&self) -> Result<Vec<Field>, ModelError>;

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;

    /// Converts a shared handle into a downcastable one.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;

    /// Returns the proxy view of this value, if it wraps another object.
    fn as_proxy(&self) -> Option<&dyn Proxy> {
        None
    }

    fn capabilities(&self) -> Capabilities {
        self.type_info().capabilities
    }
}

/// Compile-time counterpart of [`Object`], used for registration.
pub trait Reflect: Object + Sized {
    const TYPE_INFO: TypeInfo;

    /// Constructor descriptor, present only for view-models.
    fn view_model() -> Option<ViewModelDescriptor> {
        None
    }
}
