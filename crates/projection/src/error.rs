use std::borrow::Cow;
use vista_model::ModelError;
use vista_serializer::SerializerError;

/// Errors raised while declaring bindings or projecting entities.
#[vista_derive::vista_error]
pub enum ProjectionError {
    /// A binding names a type that is not in the type registry.
    #[error("Unknown view-model type '{type_name}'{}", format_context(.context))]
    UnknownType { type_name: String, context: Option<Cow<'static, str>> },

    /// A binding names a registered type that is not a view-model.
    #[error("Type {type_name} is not a view-model{}", format_context(.context))]
    CapabilityMismatch { type_name: &'static str, context: Option<Cow<'static, str>> },

    /// Projection was requested for a type without a binding.
    #[error("No view-model binding for {type_name}{}", format_context(.context))]
    MissingBinding { type_name: &'static str, context: Option<Cow<'static, str>> },

    /// The view-model is built from a different entity type than the one it is bound to.
    #[error(
        "View-model {view_model} expects {expected}, cannot bind it to {entity}{}",
        format_context(.context)
    )]
    EntityMismatch {
        entity: &'static str,
        expected: &'static str,
        view_model: &'static str,
        context: Option<Cow<'static, str>>,
    },

    /// The entity type already has a binding.
    #[error("{entity} is already bound to {existing}{}", format_context(.context))]
    DuplicateBinding {
        entity: &'static str,
        existing: &'static str,
        context: Option<Cow<'static, str>>,
    },

    /// Loading the entity or building the view-model failed.
    #[error("Projection failed{}: {source}", format_context(.context))]
    Model { source: ModelError, context: Option<Cow<'static, str>> },
}

impl ProjectionError {
    /// Finds a projection failure carried inside a serializer error.
    #[must_use]
    pub fn find(err: &SerializerError) -> Option<&Self> {
        match err {
            SerializerError::Normalizer { source, .. } => source.downcast_ref::<Self>(),
            _ => None,
        }
    }
}

impl From<ProjectionError> for SerializerError {
    fn from(err: ProjectionError) -> Self {
        match err {
            ProjectionError::Model { source, context } => Self::Model { source, context },
            other => Self::normalizer(other),
        }
    }
}
