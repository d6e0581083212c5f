use crate::context::Context;
use crate::error::{Result, SerializerError};
use crate::normalizer::{
    Normalize, Normalizer, Primitive, SupportedTypes, TypeMatcher, expect_object,
};
use serde_json::Map;
use tracing::trace;
use vista_model::Value;

/// Default hard nesting limit.
pub const DEFAULT_RECURSION_LIMIT: usize = 64;

/// Generic object flattener: reads every accessor and normalizes its result through the chain.
///
/// Honors the `groups` and `max_depth` context options. Should sit last in the chain since it
/// accepts any object.
#[derive(Debug, Clone, Copy)]
pub struct ObjectNormalizer {
    recursion_limit: usize,
}

impl Default for ObjectNormalizer {
    fn default() -> Self {
        Self { recursion_limit: DEFAULT_RECURSION_LIMIT }
    }
}

impl ObjectNormalizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Objects nested deeper than `limit` fail with [`SerializerError::RecursionLimit`].
    #[must_use]
    pub const fn recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }
}

impl Normalizer for ObjectNormalizer {
    fn supports(&self, value: &Value, _format: Option<&str>, _context: &Context) -> bool {
        value.as_object().is_some()
    }

    fn normalize(
        &self,
        value: &Value,
        format: Option<&str>,
        context: &Context,
        chain: &dyn Normalize,
    ) -> Result<Primitive> {
        let object = expect_object(value)?;
        let type_name = object.type_info().name;
        if context.depth() > self.recursion_limit {
            return Err(SerializerError::RecursionLimit {
                type_name,
                limit: self.recursion_limit,
                context: None,
            });
        }

        let groups = context.groups();
        let nested = context.nested();
        let beyond_max_depth = context.max_depth().is_some_and(|max| nested.depth() > max);

        let mut output = Map::new();
        for field in object.fields()? {
            if groups.as_deref().is_some_and(|groups| !field.in_any_group(groups)) {
                continue;
            }
            if beyond_max_depth && contains_object(field.value()) {
                trace!(type_name, field = field.name(), "Max depth reached, skipping field");
                continue;
            }
            let normalized = chain.normalize_value(field.value(), format, &nested)?;
            output.insert(field.name().to_owned(), normalized);
        }

        Ok(Primitive::Object(output))
    }

    fn supported_types(&self, _format: Option<&str>) -> SupportedTypes {
        SupportedTypes::new().with(TypeMatcher::Object, true)
    }
}

fn contains_object(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::List(items) => items.iter().any(contains_object),
        Value::Map(entries) => entries.values().any(contains_object),
        _ => false,
    }
}
