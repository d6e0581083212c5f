//! # Model Errors
//!
//! Failures raised while inspecting objects or building view-models from them.

use std::borrow::Cow;

/// Errors produced by the object model.
#[vista_derive::vista_error]
pub enum ModelError {
    /// A view-model constructor received an entity of another type.
    #[error("Entity type mismatch{}: expected {expected}, got {actual}", format_context(.context))]
    EntityMismatch {
        expected: &'static str,
        actual: &'static str,
        context: Option<Cow<'static, str>>,
    },

    /// A lazy proxy failed to load its target.
    #[error("Proxy load failed{}: {message}", format_context(.context))]
    ProxyLoad { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal model error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
