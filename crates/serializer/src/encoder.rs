use crate::context::Context;
use crate::error::{Result, SerializerErrorExt};
use crate::normalizer::Primitive;
use std::fmt::Debug;

/// Turns a primitive tree into text of one or more formats.
pub trait Encoder: Debug + Send + Sync {
    fn supports_encoding(&self, format: &str) -> bool;

    /// # Errors
    /// Returns [`SerializerError::Encoding`](crate::SerializerError::Encoding) if the tree
    /// cannot be written.
    fn encode(&self, data: &Primitive, format: &str, context: &Context) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl JsonEncoder {
    pub const FORMAT: &'static str = "json";
}

impl Encoder for JsonEncoder {
    fn supports_encoding(&self, format: &str) -> bool {
        format.eq_ignore_ascii_case(Self::FORMAT)
    }

    fn encode(&self, data: &Primitive, _format: &str, context: &Context) -> Result<String> {
        let encoded = if context.json_pretty() {
            serde_json::to_string_pretty(data)
        } else {
            serde_json::to_string(data)
        };
        encoded.context("Failed to write JSON")
    }
}
