// bandstand-core-client/bandstand-proc-macros
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro::TokenStream;

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{parse_macro_input, Data, DeriveInput, Error, Field, Fields};

/// Implements `From<&AppDependencies>` for an app service or event handler.
///
/// Fields marked with `#[inject]` are cloned from the field of the same name in
/// `AppDependencies`. Every other field starts out as `Default::default()`.
#[proc_macro_derive(InjectDependencies, attributes(inject))]
pub fn inject_dependencies(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);
    expand_inject_dependencies(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

/// Generates `pub struct <Name>Dependencies` with one public field per field of `Name`, plus
/// `From<<Name>Dependencies> for Name`. Domain services are built through it so that every
/// collaborator is passed by name.
#[proc_macro_derive(DependenciesStruct)]
pub fn dependencies_struct(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);
    expand_dependencies_struct(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn expand_inject_dependencies(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let initializers = named_fields(input)?.iter().map(|field| {
        let ident = &field.ident;
        if field.attrs.iter().any(|attr| attr.path().is_ident("inject")) {
            quote! { #ident: deps.#ident.clone() }
        } else {
            quote! { #ident: Default::default() }
        }
    });

    Ok(quote! {
        impl From<&crate::app::deps::AppDependencies> for #name {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#initializers,)*
                }
            }
        }
    })
}

fn expand_dependencies_struct(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let deps_name = format_ident!("{}Dependencies", name);
    let fields = named_fields(input)?;

    let idents = fields.iter().map(|field| &field.ident).collect::<Vec<_>>();
    let types = fields.iter().map(|field| &field.ty);

    Ok(quote! {
        pub struct #deps_name {
            #(pub #idents: #types,)*
        }

        impl From<#deps_name> for #name {
            fn from(deps: #deps_name) -> Self {
                Self {
                    #(#idents: deps.#idents,)*
                }
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<&Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(Error::new_spanned(
                &input.ident,
                "Dependencies can only be derived for structs with named fields.",
            )),
        },
        _ => Err(Error::new_spanned(
            &input.ident,
            "Dependencies can only be derived for structs.",
        )),
    }
}
