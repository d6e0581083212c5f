use crate::error::Result;
use crate::projector::Projector;
use tracing::debug;
use vista_model::Value;

/// The value a controller returned, before the response is rendered.
#[derive(Debug, Clone, Default)]
pub struct ViewEvent {
    result: Value,
}

impl ViewEvent {
    #[must_use]
    pub const fn new(result: Value) -> Self {
        Self { result }
    }

    #[must_use]
    pub const fn controller_result(&self) -> &Value {
        &self.result
    }

    pub fn set_controller_result(&mut self, result: Value) {
        self.result = result;
    }

    #[must_use]
    pub fn into_result(self) -> Value {
        self.result
    }
}

/// Replaces controller results that have a binding with their view-model.
///
/// Unlike [`ProjectingNormalizer`](crate::ProjectingNormalizer) it does not require the
/// normalizable capability, only a binding.
#[derive(Debug, Clone)]
pub struct ViewSubscriber {
    projector: Projector,
}

impl ViewSubscriber {
    #[must_use]
    pub const fn new(projector: Projector) -> Self {
        Self { projector }
    }

    /// Substitutes the controller result in place. Returns whether it did.
    ///
    /// # Errors
    /// [`ProjectionError::Model`](crate::ProjectionError::Model) if the view-model cannot be
    /// built.
    pub fn on_view(&self, event: &mut ViewEvent) -> Result<bool> {
        let Value::Object(object) = event.controller_result() else {
            return Ok(false);
        };
        if self.projector.binding_for(object.as_ref()).is_none() {
            return Ok(false);
        }

        let view = self.projector.project(object)?;
        debug!(view_model = view.type_info().name, "Replaced controller result");
        event.set_controller_result(Value::Object(view));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::Metadata;
    use std::sync::Arc;
    use vista_model::{Reflect, TypeRegistry, ViewModel};

    #[derive(Debug)]
    struct Order {
        total: u64,
    }

    #[vista_model::object(normalizable, name = "test.order")]
    impl Order {}

    #[derive(Debug)]
    struct Refund;

    #[vista_model::object(normalizable, name = "test.refund")]
    impl Refund {}

    #[derive(Debug)]
    struct OrderSummary {
        order: Arc<Order>,
    }

    impl ViewModel for OrderSummary {
        type Entity = Order;

        fn from_entity(order: Arc<Order>) -> Self {
            Self { order }
        }
    }

    #[vista_model::object(view_model, name = "test.order_summary")]
    impl OrderSummary {
        pub fn total(&self) -> u64 {
            self.order.total
        }
    }

    fn subscriber() -> ViewSubscriber {
        let types =
            TypeRegistry::builder().register::<Order>().register::<OrderSummary>().build();
        let metadata = Metadata::builder(&types).bind_type::<OrderSummary>().unwrap().build();
        ViewSubscriber::new(Projector::new(metadata))
    }

    #[test]
    fn replaces_bound_results() {
        let mut event = ViewEvent::new(Value::object(Arc::new(Order { total: 40 })));
        assert!(subscriber().on_view(&mut event).unwrap());

        let result = event.into_result();
        let view = result.as_object().unwrap();
        assert_eq!(view.type_info(), OrderSummary::TYPE_INFO);
        assert_eq!(view.as_any().downcast_ref::<OrderSummary>().unwrap().total(), 40);
    }

    #[test]
    fn leaves_other_results_alone() {
        let subscriber = subscriber();

        let mut unbound = ViewEvent::new(Value::object(Arc::new(Refund)));
        assert!(!subscriber.on_view(&mut unbound).unwrap());
        assert_eq!(unbound.controller_result().type_name(), "test.refund");

        let mut scalar = ViewEvent::new(Value::String("ok".into()));
        assert!(!subscriber.on_view(&mut scalar).unwrap());
        assert!(matches!(scalar.into_result(), Value::String(text) if text == "ok"));
    }

    #[test]
    fn views_are_not_projected_twice() {
        let subscriber = subscriber();
        let mut event = ViewEvent::new(Value::object(Arc::new(Order { total: 1 })));

        assert!(subscriber.on_view(&mut event).unwrap());
        assert!(!subscriber.on_view(&mut event).unwrap());
    }
}
