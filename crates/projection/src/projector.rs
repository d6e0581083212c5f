use crate::binding::ViewModelBinding;
use crate::error::{ProjectionError, ProjectionErrorExt, Result};
use crate::metadata::BindingLookup;
use crate::resolver::{ProxyResolver, TypeResolver};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use vista_model::{Capabilities, Object, Value};

/// Binding lookup plus view-model construction, shared by the normalizer and the view hook.
#[derive(Clone)]
pub struct Projector {
    metadata: Arc<dyn BindingLookup>,
    resolver: Arc<dyn TypeResolver>,
}

impl Projector {
    /// Projector over `metadata`, unwrapping proxies with [`ProxyResolver`].
    pub fn new(metadata: impl BindingLookup + 'static) -> Self {
        Self { metadata: Arc::new(metadata), resolver: Arc::new(ProxyResolver) }
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: impl TypeResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Binding declared for the real type of `object`. Never loads a proxy.
    #[must_use]
    pub fn binding_for(&self, object: &dyn Object) -> Option<ViewModelBinding> {
        self.metadata.lookup_binding(self.resolver.real_type(object).name)
    }

    /// Whether `value` is a normalizable object with a binding.
    #[must_use]
    pub fn is_eligible(&self, value: &Value) -> bool {
        value.as_object().is_some_and(|object| {
            object.capabilities().contains(Capabilities::NORMALIZABLE)
                && self.binding_for(object.as_ref()).is_some()
        })
    }

    /// Whether eligibility of non-proxy values can be decided once per type.
    #[must_use]
    pub fn resolves_by_type(&self) -> bool {
        self.resolver.resolves_by_type()
    }

    /// Builds the view-model bound to the real type of `object`.
    ///
    /// A proxy is loaded first and the view-model receives the loaded entity, never the proxy
    /// itself. Callers that need the proxy's identity must keep their own handle to it.
    ///
    /// # Errors
    /// * [`ProjectionError::MissingBinding`] if the real type has no binding.
    /// * [`ProjectionError::Model`] if loading or construction fails.
    pub fn project(&self, object: &Arc<dyn Object>) -> Result<Arc<dyn Object>> {
        let real_type = self.resolver.real_type(object.as_ref());
        let binding = self.metadata.lookup_binding(real_type.name).ok_or_else(|| {
            ProjectionError::MissingBinding { type_name: real_type.name, context: None }
        })?;

        let entity = self.resolver.real_object(object).context(real_type.name)?;
        let view = binding.construct(entity).context(binding.view_model_type())?;

        debug!(entity = real_type.name, view_model = binding.view_model_type(), "Projected");
        Ok(view)
    }
}

impl fmt::Debug for Projector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projector").finish_non_exhaustive()
    }
}
