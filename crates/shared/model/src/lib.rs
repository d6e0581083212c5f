//! # Object Model
//!
//! Runtime description of the values that travel through the normalizer chain.
//! Rust has no runtime reflection, so introspection is generated by [`object`] and surfaced
//! through the [`Object`] trait: a static [`TypeInfo`] (name + [`Capabilities`]) and a list of
//! named [`Field`]s.
//!
//! Keep this crate free of serialization policy: it describes values, it does not flatten them.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vista_model::{Capabilities, Object, Reflect, TypeRegistry, ViewModel, object};
//!
//! #[derive(Debug)]
//! pub struct Person { first: String, last: String }
//!
//! #[object(normalizable)]
//! impl Person {
//!     pub fn first(&self) -> &str { &self.first }
//! }
//!
//! #[derive(Debug)]
//! pub struct PersonView { person: Arc<Person> }
//!
//! impl ViewModel for PersonView {
//!     type Entity = Person;
//!     fn from_entity(person: Arc<Person>) -> Self { Self { person } }
//! }
//!
//! #[object(view_model)]
//! impl PersonView {
//!     #[field(rename = "n")]
//!     pub fn name(&self) -> String { format!("{} {}", self.person.first, self.person.last) }
//! }
//!
//! let types = TypeRegistry::builder().register::<Person>().register::<PersonView>().build();
//! let entry = types.lookup(PersonView::TYPE_INFO.name).unwrap();
//! assert!(entry.info().capabilities.contains(Capabilities::VIEW_MODEL));
//! ```

extern crate self as vista_model;

mod capabilities;
mod error;
mod markers;
mod object;
mod proxy;
mod registry;
mod value;

pub use crate::capabilities::Capabilities;
pub use crate::error::{ModelError, ModelErrorExt};
pub use crate::markers::{
    CacheableViewModel, Normalizable, ViewModel, ViewModelDescriptor, ViewModelFactory,
};
pub use crate::object::{Object, Reflect, TypeInfo};
pub use crate::proxy::{LazyProxy, Proxy};
pub use crate::registry::{TypeEntry, TypeRegistry, TypeRegistryBuilder};
pub use crate::value::{Field, IntoValue, Value};
pub use vista_derive::object;
