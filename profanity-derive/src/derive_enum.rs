//! Enum-specific `Censorable` derivation.
//!
//! Each variant gets one arm that rebuilds it with censored fields and one
//! arm that inspects its `#[censor]` fields.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataEnum, Fields, Result};

use crate::{
    strategy::parse_field_strategy,
    transform::{any_of, generate_field_transform, DeriveContext},
};

pub(crate) struct EnumDeriveOutput {
    pub(crate) censor_body: TokenStream,
    pub(crate) inspect_body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

struct VariantArms {
    censor: TokenStream,
    inspect: TokenStream,
}

pub(crate) fn derive_enum(data: DataEnum, generics: &syn::Generics) -> Result<EnumDeriveOutput> {
    let mut used_generics = Vec::new();
    let mut censor_arms = Vec::new();
    let mut inspect_arms = Vec::new();

    for variant in data.variants {
        let mut ctx = DeriveContext {
            generics,
            used_generics: &mut used_generics,
        };
        let variant_ident = &variant.ident;
        let arms = match variant.fields {
            Fields::Unit => VariantArms {
                censor: quote! { Self::#variant_ident => Self::#variant_ident },
                inspect: quote! { Self::#variant_ident => false },
            },
            Fields::Named(fields) => derive_named_variant(&mut ctx, variant_ident, fields)?,
            Fields::Unnamed(fields) => derive_unnamed_variant(&mut ctx, variant_ident, fields)?,
        };
        censor_arms.push(arms.censor);
        inspect_arms.push(arms.inspect);
    }

    // An empty enum has no values; `*self` lets the empty match type-check.
    let inspect_body = if inspect_arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#inspect_arms),*
            }
        }
    };

    Ok(EnumDeriveOutput {
        censor_body: quote! {
            match self {
                #(#censor_arms),*
            }
        },
        inspect_body,
        used_generics,
    })
}

fn derive_named_variant(
    ctx: &mut DeriveContext<'_>,
    variant_ident: &Ident,
    fields: syn::FieldsNamed,
) -> Result<VariantArms> {
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
    Ok(VariantArms {
        censor: quote! {
            Self::#variant_ident { #(#bindings),* } => {
                #(#transforms)*
                Self::#variant_ident { #(#bindings),* }
            }
        },
        inspect: quote! {
            Self::#variant_ident { #(#censored,)* .. } => #inspect
        },
    })
}

fn derive_unnamed_variant(
    ctx: &mut DeriveContext<'_>,
    variant_ident: &Ident,
    fields: syn::FieldsUnnamed,
) -> Result<VariantArms> {
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
    Ok(VariantArms {
        censor: quote! {
            Self::#variant_ident ( #(#bindings),* ) => {
                #(#transforms)*
                Self::#variant_ident ( #(#bindings),* )
            }
        },
        inspect: quote! {
            Self::#variant_ident ( #(#patterns),* ) => #inspect
        },
    })
}
