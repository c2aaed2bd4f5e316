use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream, TokenTree};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::Parser;
use syn::{
    Attribute, Fields, GenericArgument, Ident, ItemStruct, Lit, LitStr, Meta, PathArguments, Type,
    parse_quote,
};

const DEFAULT_RENAME_ALL: &str = "snake_case";
const SERDE_CRATE: &str = "::square_models::serde";

struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

struct ModelField {
    ident: Ident,
    ty: Type,
    optional: bool,
}

struct SerdeMetaInfo {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
    has_crate: bool,
}

/// Expands the `#[model]` attribute macro.
///
/// Injects derives and serde policy, annotates each field for serde and the typed builder,
/// then appends the `new`/`with` constructors and the `Display`/`Render` impls.
pub fn expand_model(args: TokenStream, mut input: ItemStruct) -> TokenStream {
    let ModelArgs { rename_all, deny_unknown_fields } = match parse_model_args(args) {
        Ok(args) => args,
        Err(err) => return err,
    };
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "model does not support generic records")
            .to_compile_error();
    }

    let fields = match prepare_fields(&mut input) {
        Ok(fields) => fields,
        Err(err) => return err,
    };
    let derives = derived_trait_names(&input.attrs);
    let serde_meta = match serde_meta_info(&input.attrs) {
        Ok(info) => info,
        Err(err) => return err,
    };

    if !derives.contains("TypedBuilder")
        && !input.attrs.iter().any(|attr| attr.path().is_ident("builder"))
    {
        input.attrs.push(parse_quote! {
            #[builder(crate_module_path = ::square_models::typed_builder)]
        });
    }

    let derive_attr = derive_attr(&derives, &fields);
    let serde_attr = match serde_attr(rename_all, deny_unknown_fields, &derives, &serde_meta, &input)
    {
        Ok(attr) => attr,
        Err(err) => return err,
    };
    let inherent_impl = inherent_impl_tokens(&input.ident, &fields);
    let display_impl = display_impl_tokens(&input.ident, &fields);

    quote! {
        #derive_attr
        #serde_attr
        #input

        #inherent_impl
        #display_impl
    }
}

fn parse_model_args(args: TokenStream) -> Result<ModelArgs, TokenStream> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

    let mut rename_all = None;
    let mut deny_unknown_fields = None;

    for meta in metas {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            )
            .to_compile_error());
        };
        let syn::Expr::Lit(expr_lit) = &name_value.value else {
            return Err(syn::Error::new_spanned(&name_value.value, "Expected a literal value")
                .to_compile_error());
        };

        match &expr_lit.lit {
            Lit::Str(lit) if name_value.path.is_ident("rename_all") => {
                if rename_all.replace(lit.clone()).is_some() {
                    return Err(duplicate(&name_value));
                }
            },
            Lit::Bool(lit) if name_value.path.is_ident("deny_unknown_fields") => {
                if deny_unknown_fields.replace(lit.value).is_some() {
                    return Err(duplicate(&name_value));
                }
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    &name_value,
                    "Unsupported argument; expected rename_all = \"...\" or deny_unknown_fields = <bool>",
                )
                .to_compile_error());
            },
        }
    }

    Ok(ModelArgs { rename_all, deny_unknown_fields })
}

fn duplicate(token: &syn::MetaNameValue) -> TokenStream {
    syn::Error::new_spanned(token, "Duplicate argument").to_compile_error()
}

fn prepare_fields(input: &mut ItemStruct) -> Result<Vec<ModelField>, TokenStream> {
    let Fields::Named(named) = &mut input.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "model only supports structs with named fields",
        )
        .to_compile_error());
    };

    let mut fields = Vec::with_capacity(named.named.len());
    for field in &mut named.named {
        let emit_null = take_field_flags(&mut field.attrs)?;
        let Some(ident) = field.ident.clone() else {
            return Err(
                syn::Error::new_spanned(&field.ty, "model requires named fields").to_compile_error()
            );
        };
        let optional = option_inner(&field.ty).is_some();
        if emit_null && !optional {
            return Err(syn::Error::new_spanned(
                &ident,
                "`emit_null` only applies to `Option<_>` fields",
            )
            .to_compile_error());
        }

        if optional {
            let present = serde_keys(&field.attrs);
            let mut items = Vec::new();
            if !present.contains("default") {
                items.push(quote! { default });
            }
            if !emit_null
                && !present.contains("skip_serializing_if")
                && !present.contains("skip_serializing")
            {
                items.push(quote! { skip_serializing_if = "Option::is_none" });
            }
            if !items.is_empty() {
                field.attrs.push(parse_quote! { #[serde(#(#items),*)] });
            }
        }

        if !field.attrs.iter().any(|attr| attr.path().is_ident("builder")) {
            let builder: Attribute = if optional {
                parse_quote! { #[builder(default, setter(into, strip_option))] }
            } else {
                parse_quote! { #[builder(setter(into))] }
            };
            field.attrs.push(builder);
        }

        fields.push(ModelField { ident, ty: field.ty.clone(), optional });
    }

    Ok(fields)
}

fn take_field_flags(attrs: &mut Vec<Attribute>) -> Result<bool, TokenStream> {
    let mut emit_null = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("model")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("emit_null") {
                emit_null = true;
                return Ok(());
            }
            Err(meta.error("Unsupported field argument; expected `emit_null`"))
        })
        .map_err(|err| err.to_compile_error())?;
    }
    attrs.retain(|attr| !attr.path().is_ident("model"));
    Ok(emit_null)
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Top-level identifiers inside `#[serde(...)]` attributes, e.g. `default` or `rename`.
fn serde_keys(attrs: &[Attribute]) -> FxHashSet<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("serde"))
        .filter_map(|attr| match &attr.meta {
            Meta::List(list) => Some(list.tokens.clone()),
            _ => None,
        })
        .flat_map(|tokens| {
            tokens.into_iter().filter_map(|tt| match tt {
                TokenTree::Ident(ident) => Some(ident.to_string()),
                _ => None,
            })
        })
        .collect()
}

fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs {
        if !attr.path().is_ident("derive") {
            continue;
        }
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.segments.last().map(|seg| seg.ident.to_string()) {
                traits.insert(ident);
            }
            Ok(())
        });
    }

    traits
}

fn serde_meta_info(attrs: &[Attribute]) -> Result<SerdeMetaInfo, TokenStream> {
    let mut info = SerdeMetaInfo { rename_all: None, deny_unknown_fields: false, has_crate: false };

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                info.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                info.deny_unknown_fields = true;
            } else if meta.path.is_ident("crate") {
                info.has_crate = true;
                meta.value()?.parse::<LitStr>()?;
            } else if meta.input.peek(syn::Token![=]) {
                meta.value()?.parse::<syn::Expr>()?;
            }
            Ok(())
        })
        .map_err(|err| err.to_compile_error())?;
    }

    Ok(info)
}

fn derive_attr(derives: &FxHashSet<String>, fields: &[ModelField]) -> TokenStream {
    let candidates = [
        ("Debug", quote! { Debug }),
        ("Clone", quote! { Clone }),
        ("PartialEq", quote! { PartialEq }),
        ("Eq", quote! { Eq }),
        ("Hash", quote! { Hash }),
        ("Serialize", quote! { ::square_models::serde::Serialize }),
        ("Deserialize", quote! { ::square_models::serde::Deserialize }),
        ("TypedBuilder", quote! { ::square_models::typed_builder::TypedBuilder }),
    ];
    let mut tokens: Vec<TokenStream> = candidates
        .into_iter()
        .filter(|(name, _)| !derives.contains(*name))
        .map(|(_, path)| path)
        .collect();

    if !derives.contains("Default") && fields.iter().all(|field| field.optional) {
        tokens.push(quote! { Default });
    }

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

fn serde_attr(
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
    derives: &FxHashSet<String>,
    serde_meta: &SerdeMetaInfo,
    input: &ItemStruct,
) -> Result<TokenStream, TokenStream> {
    let mut items = Vec::new();

    if !serde_meta.has_crate && !derives.contains("Serialize") && !derives.contains("Deserialize")
    {
        items.push(quote! { crate = #SERDE_CRATE });
    }

    let rename_all_value =
        rename_all.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME_ALL, Span::call_site()));
    match &serde_meta.rename_all {
        Some(existing) if existing.value() != rename_all_value.value() => {
            return Err(syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; remove it or set model(rename_all = \"...\") to match",
            )
            .to_compile_error());
        },
        Some(_) => {},
        None => items.push(quote! { rename_all = #rename_all_value }),
    }

    match deny_unknown_fields {
        Some(false) if serde_meta.deny_unknown_fields => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            )
            .to_compile_error());
        },
        Some(true) if !serde_meta.deny_unknown_fields => {
            items.push(quote! { deny_unknown_fields });
        },
        _ => {},
    }

    if items.is_empty() { Ok(quote! {}) } else { Ok(quote! { #[serde(#(#items),*)] }) }
}

fn inherent_impl_tokens(name: &Ident, fields: &[ModelField]) -> TokenStream {
    let required: Vec<&ModelField> = fields.iter().filter(|field| !field.optional).collect();
    let params = required.iter().map(|field| {
        let ModelField { ident, ty, .. } = field;
        quote! { #ident: impl ::core::convert::Into<#ty> }
    });
    let required_idents: Vec<&Ident> = required.iter().map(|field| &field.ident).collect();
    let optional_idents: Vec<&Ident> =
        fields.iter().filter(|field| field.optional).map(|field| &field.ident).collect();

    quote! {
        impl #name {
            /// Creates a record from its required fields; every optional field starts absent.
            #[must_use]
            pub fn new(#(#params),*) -> Self {
                Self {
                    #(#required_idents: #required_idents.into(),)*
                    #(#optional_idents: ::core::option::Option::None,)*
                }
            }

            /// Returns a copy of this record with `update` applied to the copy.
            #[must_use]
            pub fn with(&self, update: impl ::core::ops::FnOnce(&mut Self)) -> Self {
                let mut next = self.clone();
                update(&mut next);
                next
            }
        }
    }
}

fn display_impl_tokens(name: &Ident, fields: &[ModelField]) -> TokenStream {
    let header = LitStr::new(&format!("{name} : ("), Span::call_site());
    let labels: Vec<LitStr> = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let separator = if index == 0 { "" } else { ", " };
            LitStr::new(&format!("{separator}{} = ", field.ident.unraw()), Span::call_site())
        })
        .collect();
    let idents: Vec<&Ident> = fields.iter().map(|field| &field.ident).collect();

    quote! {
        #[automatically_derived]
        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(#header)?;
                #(
                    f.write_str(#labels)?;
                    ::square_models::render::Render::render(&self.#idents, f)?;
                )*
                f.write_str(")")
            }
        }

        #[automatically_derived]
        impl ::square_models::render::Render for #name {
            fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self, f)
            }
        }
    }
}
