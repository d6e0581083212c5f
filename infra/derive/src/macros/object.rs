use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{
    Attribute, FnArg, Ident, ImplItem, ImplItemFn, ItemImpl, Lit, LitStr, Meta, ReturnType, Token,
    Type, Visibility,
};

const FIELD_ATTR: &str = "field";
const ACCESSOR_PREFIXES: [&str; 3] = ["get_", "is_", "has_"];

/// Expands `#[object]` on an inherent impl block.
pub fn expand_object(args: TokenStream, mut input: ItemImpl) -> TokenStream {
    let args = match parse_object_args(args) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };
    if let Some((_, path, _)) = &input.trait_ {
        return syn::Error::new_spanned(path, "object must be applied to an inherent impl block")
            .to_compile_error();
    }
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "object does not support generic types")
            .to_compile_error();
    }
    let Some(type_ident) = type_ident(&input.self_ty) else {
        return syn::Error::new_spanned(&input.self_ty, "object expects a named type")
            .to_compile_error();
    };

    let mut accessors = Vec::new();
    for item in &mut input.items {
        let ImplItem::Fn(method) = item else { continue };
        match collect_accessor(method, args.rename_all) {
            Ok(Some(accessor)) => accessors.push(accessor),
            Ok(None) => {},
            Err(err) => return err.to_compile_error(),
        }
    }

    let self_ty = &input.self_ty;
    let type_name = args.name.as_ref().map_or_else(
        || quote! { concat!(module_path!(), "::", stringify!(#type_ident)) },
        |name| quote! { #name },
    );
    let capabilities = capabilities(&args);
    let fields = accessors.iter().map(|Accessor { method, key, groups }| {
        quote! {
            ::vista_model::Field::new(#key, ::vista_model::IntoValue::into_value(self.#method()))
                .with_groups(&[#(#groups),*])
        }
    });

    let view_model = if args.view_model {
        quote! {
            fn view_model() -> ::std::option::Option<::vista_model::ViewModelDescriptor> {
                Some(::vista_model::ViewModelDescriptor::of::<Self>())
            }
        }
    } else {
        quote! {}
    };
    let normalizable = if args.normalizable {
        quote! { impl ::vista_model::Normalizable for #self_ty {} }
    } else {
        quote! {}
    };

    quote! {
        #input

        #[automatically_derived]
        impl ::vista_model::Reflect for #self_ty {
            const TYPE_INFO: ::vista_model::TypeInfo =
                ::vista_model::TypeInfo::new(#type_name, #capabilities);

            #view_model
        }

        #[automatically_derived]
        impl ::vista_model::Object for #self_ty {
            fn type_info(&self) -> ::vista_model::TypeInfo {
                <Self as ::vista_model::Reflect>::TYPE_INFO
            }

            fn fields(
                &self,
            ) -> ::std::result::Result<
                ::std::vec::Vec<::vista_model::Field>,
                ::vista_model::ModelError,
            > {
                Ok(vec![#(#fields),*])
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn into_any(
                self: ::std::sync::Arc<Self>,
            ) -> ::std::sync::Arc<dyn ::std::any::Any + Send + Sync> {
                self
            }
        }

        #normalizable
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RenameRule {
    CamelCase,
    SnakeCase,
    Verbatim,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "camelCase" => Ok(Self::CamelCase),
            "snake_case" => Ok(Self::SnakeCase),
            "none" => Ok(Self::Verbatim),
            _ => Err(syn::Error::new_spanned(
                lit,
                "rename_all must be one of \"camelCase\", \"snake_case\" or \"none\"",
            )),
        }
    }

    fn apply(self, name: &str) -> String {
        match self {
            Self::Verbatim => name.to_owned(),
            Self::SnakeCase => name.to_ascii_lowercase(),
            Self::CamelCase => {
                let mut out = String::with_capacity(name.len());
                for (index, part) in name.split('_').filter(|p| !p.is_empty()).enumerate() {
                    let mut chars = part.chars();
                    if index == 0 {
                        out.push_str(part);
                    } else if let Some(first) = chars.next() {
                        out.extend(first.to_uppercase());
                        out.push_str(chars.as_str());
                    }
                }
                out
            },
        }
    }
}

struct ObjectArgs {
    normalizable: bool,
    view_model: bool,
    name: Option<LitStr>,
    rename_all: RenameRule,
}

fn parse_object_args(args: TokenStream) -> syn::Result<ObjectArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;

    let mut parsed = ObjectArgs {
        normalizable: false,
        view_model: false,
        name: None,
        rename_all: RenameRule::CamelCase,
    };
    let mut rename_all_seen = false;

    for meta in metas {
        match &meta {
            Meta::Path(path) if path.is_ident("normalizable") => {
                parsed.normalizable = set_flag(parsed.normalizable, path)?;
            },
            Meta::Path(path) if path.is_ident("view_model") => {
                parsed.view_model = set_flag(parsed.view_model, path)?;
            },
            Meta::NameValue(nv) if nv.path.is_ident("name") => {
                if parsed.name.is_some() {
                    return Err(syn::Error::new_spanned(nv, "Duplicate argument"));
                }
                parsed.name = Some(string_literal(&nv.value, "name")?);
            },
            Meta::NameValue(nv) if nv.path.is_ident("rename_all") => {
                if rename_all_seen {
                    return Err(syn::Error::new_spanned(nv, "Duplicate argument"));
                }
                rename_all_seen = true;
                parsed.rename_all = RenameRule::parse(&string_literal(&nv.value, "rename_all")?)?;
            },
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "Unsupported argument; expected normalizable, view_model, name or rename_all",
                ));
            },
        }
    }

    Ok(parsed)
}

fn set_flag(current: bool, path: &syn::Path) -> syn::Result<bool> {
    if current {
        return Err(syn::Error::new_spanned(path, "Duplicate argument"));
    }
    Ok(true)
}

fn string_literal(expr: &syn::Expr, label: &str) -> syn::Result<LitStr> {
    match expr {
        syn::Expr::Lit(syn::ExprLit { lit: Lit::Str(lit), .. }) => Ok(lit.clone()),
        other => Err(syn::Error::new_spanned(other, format!("{label} must be a string literal"))),
    }
}

fn capabilities(args: &ObjectArgs) -> TokenStream {
    let mut caps = quote! { ::vista_model::Capabilities::empty() };
    if args.normalizable {
        caps = quote! { #caps.union(::vista_model::Capabilities::NORMALIZABLE) };
    }
    if args.view_model {
        caps = quote! { #caps.union(::vista_model::Capabilities::VIEW_MODEL) };
    }
    caps
}

fn type_ident(ty: &Type) -> Option<&Ident> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path.path.segments.last().map(|s| &s.ident),
        _ => None,
    }
}

struct Accessor {
    method: Ident,
    key: String,
    groups: Vec<LitStr>,
}

#[derive(Default)]
struct FieldArgs {
    rename: Option<LitStr>,
    skip: bool,
    groups: Vec<LitStr>,
    attribute: Option<Attribute>,
}

/// Strips `#[field]` attributes from the method and decides whether it is an accessor.
fn collect_accessor(
    method: &mut ImplItemFn,
    rename_all: RenameRule,
) -> syn::Result<Option<Accessor>> {
    let field_args = take_field_args(&mut method.attrs)?;

    if !is_accessor(method) {
        if let Some(attr) = field_args.attribute {
            return Err(syn::Error::new_spanned(
                attr,
                "field attribute requires a public `&self` method with a return value",
            ));
        }
        return Ok(None);
    }
    if field_args.skip {
        return Ok(None);
    }

    let method_ident = method.sig.ident.clone();
    let key = field_args.rename.map_or_else(
        || {
            let name = method_ident.unraw().to_string();
            let stripped = ACCESSOR_PREFIXES
                .iter()
                .find_map(|prefix| name.strip_prefix(*prefix).filter(|rest| !rest.is_empty()))
                .unwrap_or(name.as_str());
            rename_all.apply(stripped)
        },
        |lit| lit.value(),
    );

    Ok(Some(Accessor { method: method_ident, key, groups: field_args.groups }))
}

fn take_field_args(attrs: &mut Vec<Attribute>) -> syn::Result<FieldArgs> {
    let mut args = FieldArgs::default();
    let mut kept = Vec::with_capacity(attrs.len());

    for attr in attrs.drain(..) {
        if !attr.path().is_ident(FIELD_ATTR) {
            kept.push(attr);
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if args.rename.is_some() {
                    return Err(meta.error("Duplicate argument"));
                }
                args.rename = Some(meta.value()?.parse()?);
                return Ok(());
            }
            if meta.path.is_ident("skip") {
                args.skip = true;
                return Ok(());
            }
            if meta.path.is_ident("groups") {
                let content;
                syn::parenthesized!(content in meta.input);
                let groups = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
                args.groups.extend(groups);
                return Ok(());
            }
            Err(meta.error("Unsupported field argument; expected rename, skip or groups"))
        })?;
        args.attribute = Some(attr);
    }

    *attrs = kept;
    Ok(args)
}

fn is_accessor(method: &ImplItemFn) -> bool {
    let sig = &method.sig;
    let shared_receiver = matches!(
        sig.inputs.first(),
        Some(FnArg::Receiver(receiver))
            if receiver.reference.is_some() && receiver.mutability.is_none()
    );
    let returns_value = match &sig.output {
        ReturnType::Default => false,
        ReturnType::Type(_, ty) => !matches!(&**ty, Type::Tuple(tuple) if tuple.elems.is_empty()),
    };

    matches!(method.vis, Visibility::Public(_))
        && shared_receiver
        && sig.inputs.len() == 1
        && sig.generics.params.is_empty()
        && sig.asyncness.is_none()
        && returns_value
}
