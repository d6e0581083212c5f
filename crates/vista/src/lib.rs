//! Facade crate for Vista.
//! Re-exports the object model, the normalizer chain and the projection layer, and wires them
//! into a ready-to-use [`Serializer`](serialization::Serializer).
//! Keep this crate thin: it composes other crates, it does not implement behavior.
//!
//! ## Usage
//! - Register entity and view-model types in a [`TypeRegistry`](model::TypeRegistry).
//! - Declare bindings with [`Metadata::builder`](projection::Metadata::builder).
//! - Call [`serializer`] with the metadata and a [`VistaConfig`](config::VistaConfig).
//! - Enable the `logger` feature for [`logger::Logger`].

use tracing::debug;

pub use vista_config as config;
#[cfg(feature = "logger")]
pub use vista_logger as logger;
pub use vista_model as model;
pub use vista_projection as projection;
pub use vista_serializer as serialization;

use config::VistaConfig;
use projection::{Metadata, ProjectingNormalizer, Projector, ViewSubscriber};
use serialization::{JsonEncoder, ObjectNormalizer, Serializer};

pub mod prelude {
    pub use vista_config::VistaConfig;
    pub use vista_model::{
        CacheableViewModel, Normalizable, Object, Reflect, TypeRegistry, Value, ViewModel,
        object,
    };
    pub use vista_projection::{Metadata, ProjectionError, ViewEvent, ViewSubscriber};
    pub use vista_serializer::{Context, Serializer, SerializerError};
}

/// Serializer running `[ProjectingNormalizer, ObjectNormalizer]` with the JSON encoder.
///
/// Recursion limit, default format and default context come from `config.serializer`.
#[must_use]
pub fn serializer(metadata: Metadata, config: &VistaConfig) -> Serializer {
    let settings = &config.serializer;
    debug!(
        bindings = metadata.len(),
        format = %settings.default_format,
        recursion_limit = settings.recursion_limit,
        "Composing serializer"
    );

    Serializer::builder()
        .normalizer(ProjectingNormalizer::new(Projector::new(metadata)))
        .normalizer(ObjectNormalizer::new().recursion_limit(settings.recursion_limit))
        .encoder(JsonEncoder)
        .config(settings)
        .build()
}

/// Controller-result hook sharing the bindings of a [`serializer`].
#[must_use]
pub fn view_subscriber(metadata: Metadata) -> ViewSubscriber {
    ViewSubscriber::new(Projector::new(metadata))
}

