//! Struct-specific `Censorable` derivation.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    strategy::parse_field_strategy,
    transform::{any_of, generate_field_transform, DeriveContext},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) censor_body: TokenStream,
    pub(crate) inspect_body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(
    data: DataStruct,
    generics: &syn::Generics,
) -> Result<StructDeriveOutput> {
    let mut used_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        used_generics: &mut used_generics,
    };

    let (censor_body, inspect_body) = match data.fields {
        Fields::Named(fields) => derive_named_struct(&mut ctx, fields)?,
        Fields::Unnamed(fields) => derive_unnamed_struct(&mut ctx, fields)?,
        Fields::Unit => (quote! { self }, quote! { false }),
    };

    Ok(StructDeriveOutput {
        censor_body,
        inspect_body,
        used_generics,
    })
}

fn derive_named_struct(
    ctx: &mut DeriveContext<'_>,
    fields: syn::FieldsNamed,
) -> Result<(TokenStream, TokenStream)> {
    let mut bindings = Vec::new();
    let mut censored = Vec::new();
    let mut transforms = Vec::new();
    let mut checks = Vec::new();

    for field in fields.named {
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        let Some(ident) = field.ident else {
            return Err(syn::Error::new(span, "named field should have an identifier"));
        };
        if let Some(code) = generate_field_transform(ctx, &field.ty, &ident, span, strategy)? {
            transforms.push(code.censor);
            checks.push(code.inspect);
            censored.push(ident.clone());
        }
        bindings.push(ident);
    }

    let inspect = any_of(checks);
    Ok((
        quote! {
            let Self { #(#bindings),* } = self;
            #(#transforms)*
            Self { #(#bindings),* }
        },
        quote! {
            let Self { #(#censored,)* .. } = self;
            #inspect
        },
    ))
}

fn derive_unnamed_struct(
    ctx: &mut DeriveContext<'_>,
    fields: syn::FieldsUnnamed,
) -> Result<(TokenStream, TokenStream)> {
    let mut bindings = Vec::new();
    let mut patterns = Vec::new();
    let mut transforms = Vec::new();
    let mut checks = Vec::new();

    for (index, field) in fields.unnamed.into_iter().enumerate() {
        let binding = format_ident!("field_{index}");
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        if let Some(code) = generate_field_transform(ctx, &field.ty, &binding, span, strategy)? {
            transforms.push(code.censor);
            checks.push(code.inspect);
            patterns.push(quote! { #binding });
        } else {
            patterns.push(quote! { _ });
        }
        bindings.push(binding);
    }

    let inspect = any_of(checks);
    Ok((
        quote! {
            let Self ( #(#bindings),* ) = self;
            #(#transforms)*
            Self ( #(#bindings),* )
        },
        quote! {
            let Self ( #(#patterns),* ) = self;
            #inspect
        },
    ))
}
