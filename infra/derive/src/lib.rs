#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the Vista workspace.
//! This crate replaces runtime reflection with generated code: `#[object]` turns an inherent
//! `impl` block into an introspectable object, and `#[vista_error]` wires error enums into the
//! shared error conventions.
//!
//! ## Usage
//! Consumers normally reach these macros through `vista_model` (for `object`) or depend on
//! this crate directly (for `vista_error`):
//! ```toml
//! [dependencies]
//! vista-derive = { path = "../infra/derive" }
//! ```
//!
//! Doc examples are `ignore`d to avoid compiling them in this crate; the `tests/ui` cases
//! exercise the expansions.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

/// Attribute macro that makes a type introspectable by the normalizer chain.
///
/// Applied to an inherent `impl` block, it implements `vista_model::Object` and
/// `vista_model::Reflect` for the implementing type. Every `pub fn` that takes only `&self`
/// and returns a value becomes an accessor; its result is converted with
/// `vista_model::IntoValue`.
///
/// # Output keys
///
/// The method name minus a leading `get_`, `is_` or `has_`, converted by `rename_all`
/// (`"camelCase"` by default, `"snake_case"` or `"none"`).
///
/// # Arguments
///
/// * `normalizable` - Flags the type as an entity and implements `vista_model::Normalizable`.
/// * `view_model` - Flags the type as a view-model. Requires a `vista_model::ViewModel` impl.
/// * `name = "..."` - Overrides the registered type name (default: module path + type name).
/// * `rename_all = "..."` - Key conversion rule for accessors.
///
/// # Accessor attributes
///
/// * `#[field(rename = "n")]` - Explicit output key.
/// * `#[field(skip)]` - Keeps a public method out of the output.
/// * `#[field(groups("public", "admin"))]` - Serialization groups the field belongs to.
///
/// # Example
///
/// ```rust,ignore
/// use vista_model::object;
///
/// #[derive(Debug)]
/// pub struct Person { first_name: String, age: u8 }
///
/// #[object(normalizable)]
/// impl Person {
///     pub fn first_name(&self) -> &str { &self.first_name }
///
///     #[field(rename = "years")]
///     pub fn age(&self) -> u8 { self.age }
/// }
/// ```
#[proc_macro_attribute]
pub fn object(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemImpl);
    macros::object::expand_object(args.into(), input).into()
}

/// A high-level attribute macro for defining crate-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Type Aliasing**: Creates a `Result<T>` alias next to the enum.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` if an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**, at most one per module (because of the alias).
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]`, and a context field.
/// 4. Tuple or unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[vista_derive::vista_error]
/// pub enum EncodeError {
///     #[error("JSON error{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn vista_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
