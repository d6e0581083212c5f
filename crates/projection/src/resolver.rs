use std::sync::Arc;
use vista_model::{ModelError, Object, Proxy, TypeInfo};

/// Maps a value to the type its metadata is registered under.
///
/// Lazy-loading stand-ins report their own type; metadata belongs to the type they wrap.
pub trait TypeResolver: Send + Sync {
    /// The real type of `object`. Must not load anything.
    fn real_type(&self, object: &dyn Object) -> TypeInfo;

    /// The real object, loading a stand-in if needed.
    ///
    /// # Errors
    /// Propagates the failure of a proxy load.
    fn real_object(&self, object: &Arc<dyn Object>) -> Result<Arc<dyn Object>, ModelError> {
        load_through_proxies(object)
    }

    /// Whether `real_type` of a non-proxy value depends only on its own type.
    ///
    /// When `false`, answers derived from the real type are never cached per type name.
    fn resolves_by_type(&self) -> bool {
        true
    }
}

/// Unwraps [`Proxy`] values. The default resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProxyResolver;

impl TypeResolver for ProxyResolver {
    fn real_type(&self, object: &dyn Object) -> TypeInfo {
        object.as_proxy().map_or_else(|| object.type_info(), Proxy::target_type)
    }
}

/// Takes every value at face value.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl TypeResolver for IdentityResolver {
    fn real_type(&self, object: &dyn Object) -> TypeInfo {
        object.type_info()
    }

    fn real_object(&self, object: &Arc<dyn Object>) -> Result<Arc<dyn Object>, ModelError> {
        Ok(Arc::clone(object))
    }
}

impl<F> TypeResolver for F
where
    F: Fn(&dyn Object) -> TypeInfo + Send + Sync,
{
    fn real_type(&self, object: &dyn Object) -> TypeInfo {
        self(object)
    }

    fn resolves_by_type(&self) -> bool {
        false
    }
}

fn load_through_proxies(object: &Arc<dyn Object>) -> Result<Arc<dyn Object>, ModelError> {
    let mut current = Arc::clone(object);
    while let Some(proxy) = current.as_proxy() {
        let loaded = proxy.load()?;
        current = loaded;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_model::{LazyProxy, Reflect};

    #[derive(Debug)]
    struct Row;

    #[vista_model::object(normalizable, name = "test.row")]
    impl Row {}

    fn proxy() -> Arc<dyn Object> {
        Arc::new(LazyProxy::new(|| Ok(Arc::new(Row))))
    }

    #[test]
    fn proxy_resolver_reports_target_without_loading() {
        let lazy = Arc::new(LazyProxy::new(|| Ok(Arc::new(Row))));
        assert_eq!(ProxyResolver.real_type(lazy.as_ref()), Row::TYPE_INFO);
        assert!(!lazy.is_initialized());
    }

    #[test]
    fn proxy_resolver_loads_targets() {
        let real = ProxyResolver.real_object(&proxy()).unwrap();
        assert_eq!(real.type_info(), Row::TYPE_INFO);
        assert!(real.as_proxy().is_none());
    }

    #[test]
    fn identity_resolver_keeps_proxies() {
        let value = proxy();
        assert_ne!(IdentityResolver.real_type(value.as_ref()), Row::TYPE_INFO);
        assert!(Arc::ptr_eq(&IdentityResolver.real_object(&value).unwrap(), &value));
    }

    #[test]
    fn closures_resolve_types() {
        let resolver = |_: &dyn Object| Row::TYPE_INFO;
        assert_eq!(resolver.real_type(&Row), Row::TYPE_INFO);
        assert!(!resolver.resolves_by_type());
        assert!(ProxyResolver.resolves_by_type());
    }
}
