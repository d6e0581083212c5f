use crate::capabilities::Capabilities;
use crate::error::ModelError;
use crate::markers::Normalizable;
use crate::object::{Object, Reflect, TypeInfo};
use crate::value::Field;
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// A stand-in for another object.
///
/// Metadata belongs to the real type, so callers resolve a proxy before looking anything up.
pub trait Proxy: Send + Sync {
    /// Identity of the wrapped type. Must not trigger loading.
    fn target_type(&self) -> TypeInfo;

    /// Returns the wrapped object, loading it first if needed.
    ///
    /// # Errors
    /// Returns [`ModelError::ProxyLoad`] if the target cannot be materialized.
    fn load(&self) -> Result<Arc<dyn Object>, ModelError>;
}

type Loader<T> = Box<dyn Fn() -> Result<Arc<T>, ModelError> + Send + Sync>;

/// A lazily loaded reference to a `T`, materialized at most once.
///
/// The proxy advertises the capabilities of `T` plus [`Capabilities::PROXY`], so it is
/// normalizable exactly when `T` is.
pub struct LazyProxy<T: Reflect> {
    loader: Loader<T>,
    target: RwLock<Option<Arc<T>>>,
}

impl<T: Reflect> LazyProxy<T> {
    pub fn new(loader: impl Fn() -> Result<Arc<T>, ModelError> + Send + Sync + 'static) -> Self {
        Self { loader: Box::new(loader), target: RwLock::new(None) }
    }

    /// Whether the target was already loaded.
    pub fn is_initialized(&self) -> bool {
        self.target.read().is_some()
    }

    /// Returns the typed target, loading it on first use.
    ///
    /// # Errors
    /// Propagates the loader failure.
    pub fn get(&self) -> Result<Arc<T>, ModelError> {
        if let Some(target) = self.target.read().as_ref() {
            return Ok(Arc::clone(target));
        }

        let mut slot = self.target.write();
        if let Some(target) = slot.as_ref() {
            return Ok(Arc::clone(target));
        }

        trace!(target_type = T::TYPE_INFO.name, "Loading proxy target");
        let target = (self.loader)()?;
        *slot = Some(Arc::clone(&target));
        Ok(target)
    }
}

impl<T: Reflect> fmt::Debug for LazyProxy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyProxy")
            .field("target_type", &T::TYPE_INFO.name)
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

impl<T: Reflect> Proxy for LazyProxy<T> {
    fn target_type(&self) -> TypeInfo {
        T::TYPE_INFO
    }

    fn load(&self) -> Result<Arc<dyn Object>, ModelError> {
        let target: Arc<dyn Object> = self.get()?;
        Ok(target)
    }
}

impl<T: Reflect> Object for LazyProxy<T> {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::new(
            std::any::type_name::<Self>(),
            T::TYPE_INFO.capabilities.union(Capabilities::PROXY),
        )
    }

    fn fields(&self) -> Result<Vec<Field>, ModelError> {
        self.get()?.fields()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }

    fn as_proxy(&self) -> Option<&dyn Proxy> {
        Some(self)
    }
}

impl<T: Reflect + Normalizable> Normalizable for LazyProxy<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Invoice {
        total: u32,
    }

    #[crate::object(normalizable)]
    impl Invoice {
        pub fn total(&self) -> u32 {
            self.total
        }
    }

    #[test]
    fn loads_target_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let proxy = LazyProxy::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Invoice { total: 42 }))
        });

        assert!(!proxy.is_initialized());
        assert_eq!(proxy.get().unwrap().total, 42);
        assert_eq!(proxy.get().unwrap().total, 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reports_target_identity_without_loading() {
        let proxy = LazyProxy::<Invoice>::new(|| Err("unreachable".into()));

        assert_eq!(proxy.target_type(), Invoice::TYPE_INFO);
        assert!(proxy.capabilities().contains(Capabilities::NORMALIZABLE | Capabilities::PROXY));
        assert!(!proxy.is_initialized());
    }

    #[test]
    fn fields_come_from_target() {
        let proxy = LazyProxy::new(|| Ok(Arc::new(Invoice { total: 7 })));
        let fields = proxy.fields().unwrap();

        assert_eq!(fields[0].name(), "total");
        assert!(matches!(fields[0].value(), Value::UInt(7)));
    }

    #[test]
    fn loader_errors_propagate() {
        let proxy = LazyProxy::<Invoice>::new(|| {
            Err(ModelError::ProxyLoad { message: "row 9 missing".into(), context: None })
        });

        assert!(matches!(proxy.load(), Err(ModelError::ProxyLoad { .. })));
    }
}
