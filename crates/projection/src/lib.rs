//! # Projection
//!
//! Inserts view-models into the normalizer chain.
//!
//! An entity type flagged [`Normalizable`](vista_model::Normalizable) is bound to one
//! [`ViewModel`](vista_model::ViewModel) type in [`Metadata`]. When the
//! [`ProjectingNormalizer`] meets such an entity, it builds a fresh view-model around it and
//! gives the view-model, not the entity, back to the chain. Lazy-loading proxies are resolved
//! to the type they wrap before any lookup.
//!
//! Bindings are validated when declared, so a misspelled or non-view-model type fails at
//! start-up rather than during serialization.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vista_model::{TypeRegistry, Value, ViewModel, object};
//! use vista_projection::{Metadata, ProjectingNormalizer, Projector};
//! use vista_serializer::{Context, JsonEncoder, ObjectNormalizer, Serializer};
//!
//! #[derive(Debug)]
//! pub struct Person { first: String, last: String }
//!
//! #[object(normalizable, name = "app.person")]
//! impl Person {}
//!
//! #[derive(Debug)]
//! pub struct PersonView { person: Arc<Person> }
//!
//! impl ViewModel for PersonView {
//!     type Entity = Person;
//!     fn from_entity(person: Arc<Person>) -> Self { Self { person } }
//! }
//!
//! #[object(view_model, name = "app.person_view")]
//! impl PersonView {
//!     #[field(rename = "n")]
//!     pub fn name(&self) -> String { format!("{} {}", self.person.first, self.person.last) }
//! }
//!
//! let types = TypeRegistry::builder().register::<Person>().register::<PersonView>().build();
//! let metadata = Metadata::builder(&types).bind::<Person>("app.person_view").unwrap().build();
//!
//! let serializer = Serializer::builder()
//!     .normalizer(ProjectingNormalizer::new(Projector::new(metadata)))
//!     .normalizer(ObjectNormalizer::new())
//!     .encoder(JsonEncoder)
//!     .build();
//!
//! let jane = Value::object(Arc::new(Person { first: "Jane".into(), last: "Doe".into() }));
//! let json = serializer.serialize(&jane, None, &Context::new()).unwrap();
//! assert_eq!(json, r#"{"n":"Jane Doe"}"#);
//! ```

mod binding;
mod error;
mod metadata;
mod normalizer;
mod projector;
mod resolver;
mod subscriber;

pub use crate::binding::ViewModelBinding;
pub use crate::error::{ProjectionError, ProjectionErrorExt};
pub use crate::metadata::{BindingLookup, Metadata, MetadataBuilder};
pub use crate::normalizer::ProjectingNormalizer;
pub use crate::projector::Projector;
pub use crate::resolver::{IdentityResolver, ProxyResolver, TypeResolver};
pub use crate::subscriber::{ViewEvent, ViewSubscriber};
