use crate::projector::Projector;
use tracing::trace;
use vista_model::{Capabilities, Value};
use vista_serializer::{
    Context, Normalize, Normalizer, Primitive, SerializerError, SupportedTypes, TypeMatcher,
    expect_object,
};

/// Chain link that swaps a bound entity for a fresh view-model and hands it back to the chain.
///
/// Holds no state of its own; bindings and proxy resolution live in the [`Projector`].
#[derive(Debug, Clone)]
pub struct ProjectingNormalizer {
    projector: Projector,
}

impl ProjectingNormalizer {
    #[must_use]
    pub const fn new(projector: Projector) -> Self {
        Self { projector }
    }

    #[must_use]
    pub const fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Normalizes the view-model bound to `value` with the unchanged format and context.
    ///
    /// If `value` is a proxy, the view-model wraps the loaded entity rather than the proxy.
    ///
    /// Does not rely on [`Normalizer::supports`] having been called.
    ///
    /// # Errors
    /// * [`SerializerError::Normalizer`] wrapping
    ///   [`ProjectionError::MissingBinding`](crate::ProjectionError::MissingBinding) when the
    ///   real type has no binding.
    /// * [`SerializerError::Model`] if the proxy or the view-model cannot be built.
    /// * Any error of `chain`, unchanged.
    pub fn project(
        &self,
        value: &Value,
        format: Option<&str>,
        context: &Context,
        chain: &dyn Normalize,
    ) -> Result<Primitive, SerializerError> {
        let entity = expect_object(value)?;
        let view = self.projector.project(entity)?;

        trace!(view_model = view.type_info().name, "Delegating view-model to chain");
        chain.normalize_value(&Value::Object(view), format, context)
    }
}

impl Normalizer for ProjectingNormalizer {
    fn supports(&self, value: &Value, _format: Option<&str>, _context: &Context) -> bool {
        self.projector.is_eligible(value)
    }

    fn normalize(
        &self,
        value: &Value,
        format: Option<&str>,
        context: &Context,
        chain: &dyn Normalize,
    ) -> Result<Primitive, SerializerError> {
        self.project(value, format, context, chain)
    }

    /// Proxies are never cached: one proxy type can stand in for entities of several types.
    fn supported_types(&self, _format: Option<&str>) -> SupportedTypes {
        let normalizable = TypeMatcher::Capability(Capabilities::NORMALIZABLE);
        if !self.projector.resolves_by_type() {
            return SupportedTypes::new().with(normalizable, false);
        }
        SupportedTypes::new().with(TypeMatcher::Proxy, false).with(normalizable, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::Metadata;
    use serde_json::json;
    use std::sync::Arc;
    use vista_model::{TypeRegistry, ViewModel};
    use vista_serializer::{ObjectNormalizer, Serializer};

    #[derive(Debug)]
    struct Sensor {
        celsius: f64,
    }

    #[vista_model::object(normalizable, name = "test.sensor")]
    impl Sensor {
        pub fn celsius(&self) -> f64 {
            self.celsius
        }
    }

    #[derive(Debug)]
    struct SensorReading {
        sensor: Arc<Sensor>,
    }

    impl ViewModel for SensorReading {
        type Entity = Sensor;

        fn from_entity(sensor: Arc<Sensor>) -> Self {
            Self { sensor }
        }
    }

    #[vista_model::object(view_model, name = "test.sensor_reading")]
    impl SensorReading {
        pub fn fahrenheit(&self) -> f64 {
            self.sensor.celsius.mul_add(1.8, 32.0)
        }
    }

    fn projecting() -> ProjectingNormalizer {
        let types =
            TypeRegistry::builder().register::<Sensor>().register::<SensorReading>().build();
        let metadata = Metadata::builder(&types).bind_type::<SensorReading>().unwrap().build();
        ProjectingNormalizer::new(Projector::new(metadata))
    }

    #[test]
    fn supports_only_bound_normalizable_objects() {
        let normalizer = projecting();
        let context = Context::new();

        let sensor = Value::object(Arc::new(Sensor { celsius: 0.0 }));
        assert!(normalizer.supports(&sensor, None, &context));
        assert!(!normalizer.supports(&Value::String("x".into()), None, &context));
    }

    #[test]
    fn caches_plain_entities_but_not_proxies() {
        let supported = projecting().supported_types(None);
        assert!(matches!(
            supported.entries(),
            [(TypeMatcher::Proxy, false), (TypeMatcher::Capability(caps), true)]
                if *caps == Capabilities::NORMALIZABLE
        ));

        let lazy = Value::object(Arc::new(vista_model::LazyProxy::new(|| {
            Ok(Arc::new(Sensor { celsius: 1.0 }))
        })));
        let sensor = Value::object(Arc::new(Sensor { celsius: 1.0 }));
        assert_eq!(supported.matches(&lazy), Some(false));
        assert_eq!(supported.matches(&sensor), Some(true));
    }

    #[test]
    fn closure_resolvers_disable_caching() {
        let resolver = |object: &dyn vista_model::Object| object.type_info();
        let projector = projecting().projector().clone().with_resolver(resolver);
        let normalizer = ProjectingNormalizer::new(projector);

        let sensor = Value::object(Arc::new(Sensor { celsius: 1.0 }));
        assert_eq!(normalizer.supported_types(None).matches(&sensor), Some(false));
    }

    #[test]
    fn chain_sees_the_view_model() {
        let serializer = Serializer::builder()
            .normalizer(projecting())
            .normalizer(ObjectNormalizer::new())
            .build();

        let sensor = Value::object(Arc::new(Sensor { celsius: 100.0 }));
        let normalized = serializer.normalize(&sensor, None, &Context::new()).unwrap();
        assert_eq!(normalized, json!({ "fahrenheit": 212.0 }));
    }

    #[test]
    fn rejects_non_objects() {
        let serializer = Serializer::builder().normalizer(ObjectNormalizer::new()).build();
        let err = projecting()
            .project(&Value::Bool(true), None, &Context::new(), &serializer)
            .unwrap_err();
        assert!(matches!(err, SerializerError::NotNormalizable { type_name: "bool", .. }));
    }
}
