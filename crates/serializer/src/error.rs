use std::borrow::Cow;
use vista_model::ModelError;

/// Errors raised while normalizing or encoding.
#[vista_derive::vista_error]
pub enum SerializerError {
    /// No normalizer in the chain accepted the object.
    #[error("No normalizer supports {type_name}{}", format_context(.context))]
    NotNormalizable { type_name: &'static str, context: Option<Cow<'static, str>> },

    /// No encoder is registered for the requested format.
    #[error("Unsupported format '{format}'{}", format_context(.context))]
    UnsupportedFormat { format: String, context: Option<Cow<'static, str>> },

    /// Object nesting went past the hard limit, usually a self-referencing graph.
    #[error("Recursion limit of {limit} reached at {type_name}{}", format_context(.context))]
    RecursionLimit { type_name: &'static str, limit: usize, context: Option<Cow<'static, str>> },

    /// A float that JSON cannot represent (NaN or infinite).
    #[error("Number {value} cannot be normalized{}", format_context(.context))]
    InvalidNumber { value: f64, context: Option<Cow<'static, str>> },

    #[error("Encoding error{}: {source}", format_context(.context))]
    Encoding { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// An object failed while being read.
    #[error("Model error{}: {source}", format_context(.context))]
    Model { source: ModelError, context: Option<Cow<'static, str>> },

    /// Failure reported by a normalizer defined outside this crate.
    #[error("Normalizer failed{}: {source}", format_context(.context))]
    Normalizer {
        source: Box<dyn std::error::Error + Send + Sync>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal serializer error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl SerializerError {
    /// Wraps an error from a foreign normalizer.
    pub fn normalizer(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Normalizer { source: Box::new(source), context: None }
    }
}
