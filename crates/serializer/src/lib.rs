//! # Serializer
//!
//! A chain of [`Normalizer`]s that turns [`vista_model::Value`] trees into plain
//! [`Primitive`] trees, and [`Encoder`]s that write those trees out.
//!
//! The [`Serializer`] owns the chain. Scalars and collections are converted in place; each
//! object goes to the first normalizer that accepts it, which may hand values back to the chain
//! through [`Normalize`].
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vista_model::{Value, object};
//! use vista_serializer::{Context, JsonEncoder, ObjectNormalizer, Serializer};
//!
//! #[derive(Debug)]
//! pub struct Point { x: i32, y: i32 }
//!
//! #[object]
//! impl Point {
//!     pub fn x(&self) -> i32 { self.x }
//!     pub fn y(&self) -> i32 { self.y }
//! }
//!
//! let serializer = Serializer::builder()
//!     .normalizer(ObjectNormalizer::new())
//!     .encoder(JsonEncoder)
//!     .build();
//!
//! let json = serializer
//!     .serialize(&Value::object(Arc::new(Point { x: 1, y: 2 })), None, &Context::new())
//!     .unwrap();
//! assert_eq!(json, r#"{"x":1,"y":2}"#);
//! ```

mod context;
mod encoder;
mod error;
mod normalizer;
mod object;
mod serializer;

pub use crate::context::Context;
pub use crate::encoder::{Encoder, JsonEncoder};
pub use crate::error::{SerializerError, SerializerErrorExt};
pub use crate::normalizer::{
    Normalize, Normalizer, Primitive, SupportedTypes, TypeMatcher, expect_object,
};
pub use crate::object::{DEFAULT_RECURSION_LIMIT, ObjectNormalizer};
pub use crate::serializer::{Serializer, SerializerBuilder};
