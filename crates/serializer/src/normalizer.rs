use crate::context::Context;
use crate::error::{Result, SerializerError};
use std::fmt::Debug;
use std::sync::Arc;
use vista_model::{Capabilities, Object, Value};

/// Output of normalization: a tree of plain maps, lists and scalars.
pub type Primitive = serde_json::Value;

/// Entry point of a normalizer chain.
///
/// Normalizers receive the chain they belong to so they can hand nested or substituted values
/// back to it.
pub trait Normalize: Send + Sync {
    /// Normalizes any value, dispatching objects to the first normalizer that supports them.
    ///
    /// # Errors
    /// Returns the error of the normalizer that handled the value, or
    /// [`SerializerError::NotNormalizable`] if none did.
    fn normalize_value(
        &self,
        value: &Value,
        format: Option<&str>,
        context: &Context,
    ) -> Result<Primitive>;
}

/// One link of the chain.
pub trait Normalizer: Debug + Send + Sync {
    /// Whether this normalizer handles `value`. Must not mutate anything.
    fn supports(&self, value: &Value, format: Option<&str>, context: &Context) -> bool;

    /// Converts `value`; `chain` normalizes anything nested.
    ///
    /// # Errors
    /// Implementation specific. Errors from `chain` should be returned unchanged.
    fn normalize(
        &self,
        value: &Value,
        format: Option<&str>,
        context: &Context,
        chain: &dyn Normalize,
    ) -> Result<Primitive>;

    /// Value kinds this normalizer may support for `format`.
    fn supported_types(&self, format: Option<&str>) -> SupportedTypes;
}

/// Selects values by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMatcher {
    /// Every value.
    Any,
    /// Every object.
    Object,
    /// Objects carrying all of these capabilities.
    Capability(Capabilities),
    /// Objects of exactly this registered type.
    Type(&'static str),
    /// Stand-ins for other objects. One proxy type may wrap values of several types, so answers
    /// for it are rarely cacheable.
    Proxy,
}

impl TypeMatcher {
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Any, _) => true,
            (Self::Object, Value::Object(_)) => true,
            (Self::Capability(caps), Value::Object(object)) => {
                object.capabilities().contains(*caps)
            },
            (Self::Type(name), Value::Object(object)) => object.type_info().name == *name,
            (Self::Proxy, Value::Object(object)) => {
                object.as_proxy().is_some() || object.capabilities().contains(Capabilities::PROXY)
            },
            _ => false,
        }
    }
}

/// Pre-filter a normalizer declares before [`Normalizer::supports`] is consulted.
///
/// Each matcher carries a flag telling whether the `supports` answer depends only on the
/// value's type and the format, in which case the serializer caches it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedTypes {
    entries: Vec<(TypeMatcher, bool)>,
}

impl SupportedTypes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supports nothing; `supports` is never called.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, matcher: TypeMatcher, cacheable: bool) -> Self {
        self.entries.push((matcher, cacheable));
        self
    }

    /// The cacheable flag of the first matcher accepting `value`.
    #[must_use]
    pub fn matches(&self, value: &Value) -> Option<bool> {
        self.entries
            .iter()
            .find(|(matcher, _)| matcher.matches(value))
            .map(|(_, cacheable)| *cacheable)
    }

    #[must_use]
    pub fn entries(&self) -> &[(TypeMatcher, bool)] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the object behind `value`.
///
/// # Errors
/// [`SerializerError::NotNormalizable`] for non-object values.
pub fn expect_object(value: &Value) -> Result<&Arc<dyn Object>> {
    value.as_object().ok_or_else(|| SerializerError::NotNormalizable {
        type_name: value.type_name(),
        context: Some("Expected an object".into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Tag;

    #[vista_model::object(normalizable, name = "test.tag")]
    impl Tag {}

    #[test]
    fn matchers_inspect_objects() {
        let tag = Value::object(Arc::new(Tag));

        assert!(TypeMatcher::Any.matches(&Value::Null));
        assert!(!TypeMatcher::Object.matches(&Value::Bool(true)));
        assert!(TypeMatcher::Object.matches(&tag));
        assert!(TypeMatcher::Capability(Capabilities::NORMALIZABLE).matches(&tag));
        assert!(!TypeMatcher::Capability(Capabilities::VIEW_MODEL).matches(&tag));
        assert!(TypeMatcher::Type("test.tag").matches(&tag));
        assert!(!TypeMatcher::Type("test.other").matches(&tag));
        assert!(!TypeMatcher::Proxy.matches(&tag));
    }

    #[test]
    fn proxy_matcher_accepts_stand_ins() {
        let lazy = Value::object(Arc::new(vista_model::LazyProxy::new(|| Ok(Arc::new(Tag)))));
        assert!(TypeMatcher::Proxy.matches(&lazy));
        assert!(!TypeMatcher::Proxy.matches(&Value::Null));
    }

    #[test]
    fn first_matching_entry_decides_caching() {
        let types = SupportedTypes::new()
            .with(TypeMatcher::Type("test.tag"), false)
            .with(TypeMatcher::Object, true);

        assert_eq!(types.matches(&Value::object(Arc::new(Tag))), Some(false));
        assert_eq!(types.matches(&Value::Int(1)), None);
        assert!(SupportedTypes::none().matches(&Value::Null).is_none());
    }
}
