use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, FieldsNamed, Ident, Type, Variant};

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source_ty: Option<&'a Type>,
    is_internal: bool,
}

pub fn expand_error(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("square_error can only be applied to enums"); };
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        match describe_variant(variant) {
            Ok(described) => variants.push(described),
            Err(err) => return err,
        }
    }

    let derives = derived_trait_names(&input);
    let mut derive_tokens = Vec::new();
    if !derives.contains("Debug") {
        derive_tokens.push(quote! { Debug });
    }
    if !derives.contains("Error") {
        derive_tokens.push(quote! { ::thiserror::Error });
    }
    let derive_attr = if derive_tokens.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#derive_tokens),*)] }
    };

    let idents: Vec<&Ident> = variants.iter().map(|v| v.ident).collect();
    let source_impls = variants.iter().filter_map(|v| {
        let source_ty = v.source_ty?;
        let ident = v.ident;
        Some(quote! {
            #[automatically_derived]
            impl From<#source_ty> for #name {
                #[inline]
                fn from(source: #source_ty) -> Self { Self::#ident { source, context: None } }
            }

            impl<T> #ext<T> for ::core::result::Result<T, #source_ty> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::core::result::Result<T, #name> {
                    self.map_err(|source| #name::#ident { source, context: Some(context.into()) })
                }
            }
        })
    });
    let internal_impls = variants.iter().find(|v| v.is_internal).map(|v| {
        let ident = v.ident;
        quote! {
            impl From<&'static str> for #name {
                #[inline]
                fn from(message: &'static str) -> Self {
                    Self::#ident { message: ::std::borrow::Cow::Borrowed(message), context: None }
                }
            }

            impl From<String> for #name {
                #[inline]
                fn from(message: String) -> Self {
                    Self::#ident { message: ::std::borrow::Cow::Owned(message), context: None }
                }
            }
        }
    });

    quote! {
        #derive_attr
        #input

        pub trait #ext<T> {
            /// Attaches a human-readable context to the error, if any.
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::core::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #( #name::#idents { context: slot, .. } => *slot = Some(context.into()), )*
                    }
                    err
                })
            }
        }

        #(#source_impls)*
        #internal_impls

        #[allow(dead_code, clippy::ref_option)]
        fn format_context(
            context: &Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    }
}

fn describe_variant(variant: &Variant) -> Result<ErrorVariant<'_>, TokenStream> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "square_error requires named fields so every variant can carry a context",
        )
        .to_compile_error());
    };

    if !has_context_field(fields) {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "square_error requires `context: Option<Cow<'static, str>>` on every variant",
        )
        .to_compile_error());
    }

    let source = fields.named.iter().find(|field| field.ident.as_ref().is_some_and(|i| i == "source"));
    if source.is_some() && fields.named.len() != 2 {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "variants with a `source` field may only carry `source` and `context`",
        )
        .to_compile_error());
    }

    let is_internal = variant.ident == "Internal"
        && fields.named.iter().any(|field| field.ident.as_ref().is_some_and(|i| i == "message"));

    Ok(ErrorVariant { ident: &variant.ident, source_ty: source.map(|field| &field.ty), is_internal })
}

fn has_context_field(fields: &FieldsNamed) -> bool {
    fields.named.iter().any(|field| {
        if !field.ident.as_ref().is_some_and(|ident| ident == "context") {
            return false;
        }
        let ty = &field.ty;
        let rendered = quote!(#ty).to_string().replace(' ', "");
        rendered.starts_with("Option<") && rendered.ends_with("Cow<'static,str>>")
    })
}

fn derived_trait_names(input: &DeriveInput) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(seg) = meta.path.segments.last() {
                traits.insert(seg.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}
