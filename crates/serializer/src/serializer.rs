use crate::context::Context;
use crate::encoder::{Encoder, JsonEncoder};
use crate::error::{Result, SerializerError};
use crate::normalizer::{Normalize, Normalizer, Primitive};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use serde_json::{Map, Number};
use std::sync::Arc;
use tracing::{debug, trace};
use vista_config::SerializerConfig;
use vista_model::Value;

/// Cached `supports` answers, keyed by normalizer position, type name and format.
type SupportCache = RwLock<FxHashMap<(usize, &'static str, Option<String>), bool>>;

/// The normalizer chain plus the encoders.
///
/// Scalars, lists and maps are converted in place; objects go to the first normalizer whose
/// [`SupportedTypes`](crate::SupportedTypes) and `supports` both accept them.
#[derive(Debug)]
pub struct Serializer {
    normalizers: Vec<Arc<dyn Normalizer>>,
    encoders: Vec<Arc<dyn Encoder>>,
    default_format: String,
    defaults: Context,
    support_cache: SupportCache,
}

impl Serializer {
    #[must_use]
    pub fn builder() -> SerializerBuilder {
        SerializerBuilder::default()
    }

    /// Normalizes `value` into a primitive tree.
    ///
    /// `context` is completed with the serializer defaults before the chain sees it.
    ///
    /// # Errors
    /// Propagates the first failing normalizer's error.
    pub fn normalize(
        &self,
        value: &Value,
        format: Option<&str>,
        context: &Context,
    ) -> Result<Primitive> {
        self.normalize_value(value, format, &context.with_defaults(&self.defaults))
    }

    /// Encodes a primitive tree; `format` falls back to the configured default.
    ///
    /// # Errors
    /// [`SerializerError::UnsupportedFormat`] if no encoder handles the format.
    pub fn encode(
        &self,
        data: &Primitive,
        format: Option<&str>,
        context: &Context,
    ) -> Result<String> {
        let format = format.unwrap_or(&self.default_format);
        let encoder = self.encoder(format)?;
        encoder.encode(data, format, &context.with_defaults(&self.defaults))
    }

    /// Normalizes then encodes.
    ///
    /// # Errors
    /// See [`Serializer::normalize`] and [`Serializer::encode`].
    pub fn serialize(
        &self,
        value: &Value,
        format: Option<&str>,
        context: &Context,
    ) -> Result<String> {
        let format = format.unwrap_or(&self.default_format);
        let encoder = self.encoder(format)?;
        let context = context.with_defaults(&self.defaults);
        let data = self.normalize_value(value, Some(format), &context)?;
        encoder.encode(&data, format, &context)
    }

    /// Whether `format` can be encoded.
    #[must_use]
    pub fn supports_format(&self, format: &str) -> bool {
        self.encoders.iter().any(|encoder| encoder.supports_encoding(format))
    }

    #[must_use]
    pub fn normalizers(&self) -> &[Arc<dyn Normalizer>] {
        &self.normalizers
    }

    #[must_use]
    pub fn default_format(&self) -> &str {
        &self.default_format
    }

    fn encoder(&self, format: &str) -> Result<&Arc<dyn Encoder>> {
        self.encoders.iter().find(|encoder| encoder.supports_encoding(format)).ok_or_else(|| {
            SerializerError::UnsupportedFormat { format: format.to_owned(), context: None }
        })
    }

    fn dispatch(
        &self,
        value: &Value,
        format: Option<&str>,
        context: &Context,
    ) -> Result<Primitive> {
        for (index, normalizer) in self.normalizers.iter().enumerate() {
            let Some(cacheable) = normalizer.supported_types(format).matches(value) else {
                continue;
            };
            let supported = if cacheable {
                self.cached_supports(index, normalizer.as_ref(), value, format, context)
            } else {
                normalizer.supports(value, format, context)
            };
            if supported {
                trace!(type_name = value.type_name(), normalizer = index, "Dispatching object");
                return normalizer.normalize(value, format, context, self);
            }
        }

        debug!(type_name = value.type_name(), "No normalizer supports object");
        Err(SerializerError::NotNormalizable { type_name: value.type_name(), context: None })
    }

    fn cached_supports(
        &self,
        index: usize,
        normalizer: &dyn Normalizer,
        value: &Value,
        format: Option<&str>,
        context: &Context,
    ) -> bool {
        let key = (index, value.type_name(), format.map(str::to_owned));
        if let Some(supported) = self.support_cache.read().get(&key) {
            return *supported;
        }
        let supported = normalizer.supports(value, format, context);
        self.support_cache.write().insert(key, supported);
        supported
    }
}

impl Normalize for Serializer {
    fn normalize_value(
        &self,
        value: &Value,
        format: Option<&str>,
        context: &Context,
    ) -> Result<Primitive> {
        Ok(match value {
            Value::Null => Primitive::Null,
            Value::Bool(b) => Primitive::Bool(*b),
            Value::Int(n) => Primitive::from(*n),
            Value::UInt(n) => Primitive::from(*n),
            Value::Float(f) => Number::from_f64(*f)
                .map(Primitive::Number)
                .ok_or(SerializerError::InvalidNumber { value: *f, context: None })?,
            Value::String(s) => Primitive::String(s.clone()),
            Value::List(items) => Primitive::Array(
                items
                    .iter()
                    .map(|item| self.normalize_value(item, format, context))
                    .collect::<Result<_>>()?,
            ),
            Value::Map(entries) => Primitive::Object(
                entries
                    .iter()
                    .map(|(key, item)| {
                        self.normalize_value(item, format, context).map(|item| (key.clone(), item))
                    })
                    .collect::<Result<Map<_, _>>>()?,
            ),
            Value::Object(_) => self.dispatch(value, format, context)?,
        })
    }
}

/// Assembles a [`Serializer`].
#[derive(Debug)]
pub struct SerializerBuilder {
    normalizers: Vec<Arc<dyn Normalizer>>,
    encoders: Vec<Arc<dyn Encoder>>,
    default_format: String,
    defaults: Context,
}

impl Default for SerializerBuilder {
    fn default() -> Self {
        Self {
            normalizers: Vec::new(),
            encoders: Vec::new(),
            default_format: JsonEncoder::FORMAT.to_owned(),
            defaults: Context::new(),
        }
    }
}

impl SerializerBuilder {
    /// Appends a normalizer. Earlier normalizers take precedence.
    #[must_use = "The builder must be finished with `build`"]
    pub fn normalizer(self, normalizer: impl Normalizer + 'static) -> Self {
        self.shared_normalizer(Arc::new(normalizer))
    }

    #[must_use = "The builder must be finished with `build`"]
    pub fn shared_normalizer(mut self, normalizer: Arc<dyn Normalizer>) -> Self {
        self.normalizers.push(normalizer);
        self
    }

    #[must_use = "The builder must be finished with `build`"]
    pub fn encoder(mut self, encoder: impl Encoder + 'static) -> Self {
        self.encoders.push(Arc::new(encoder));
        self
    }

    #[must_use = "The builder must be finished with `build`"]
    pub fn default_format(mut self, format: impl Into<String>) -> Self {
        self.default_format = format.into();
        self
    }

    /// Options applied to every call unless the caller sets them.
    #[must_use = "The builder must be finished with `build`"]
    pub fn default_context(mut self, context: Context) -> Self {
        self.defaults = context;
        self
    }

    /// Takes the default format, `max_depth` and `json_pretty` from configuration.
    #[must_use = "The builder must be finished with `build`"]
    pub fn config(mut self, config: &SerializerConfig) -> Self {
        self.default_format.clone_from(&config.default_format);
        if let Some(depth) = config.max_depth {
            self.defaults = self.defaults.with_max_depth(depth);
        }
        if config.json_pretty {
            self.defaults = self.defaults.pretty();
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Serializer {
        debug!(
            normalizers = self.normalizers.len(),
            encoders = self.encoders.len(),
            default_format = %self.default_format,
            "Serializer built"
        );
        Serializer {
            normalizers: self.normalizers,
            encoders: self.encoders,
            default_format: self.default_format,
            defaults: self.defaults,
            support_cache: RwLock::new(FxHashMap::default()),
        }
    }
}
