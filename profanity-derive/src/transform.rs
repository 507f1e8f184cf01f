//! Shared field code generation for struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::Result;

use crate::{
    crate_path,
    generics::collect_generics_from_type,
    strategy::Strategy,
    types::{is_reference_type, is_scalar_type},
};

/// Generic parameters collected while processing fields.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) used_generics: &'a mut Vec<Ident>,
}

/// Generated code for one `#[censor]` field.
pub(crate) struct CensoredField {
    /// Statement rebinding the field to its censored value.
    pub(crate) censor: TokenStream,
    /// Expression checking the borrowed field for matches.
    pub(crate) inspect: TokenStream,
}

/// Generates the code for a single field.
///
/// Returns `None` for pass-through fields, which need neither a rebinding
/// nor an inspection.
pub(crate) fn generate_field_transform(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    span: Span,
    strategy: Strategy,
) -> Result<Option<CensoredField>> {
    match strategy {
        Strategy::PassThrough => Ok(None),
        Strategy::Censor => {
            if is_scalar_type(ty) {
                return Err(syn::Error::new(
                    span,
                    "scalar fields hold no text: remove #[censor] from this field",
                ));
            }
            if is_reference_type(ty) {
                return Err(syn::Error::new(
                    span,
                    "borrowed fields cannot be censored in place: \
                    use an owned type such as String or Cow<'_, str>",
                ));
            }
            collect_generics_from_type(ty, ctx.generics, ctx.used_generics);
            let censorable = crate_path("Censorable");
            Ok(Some(CensoredField {
                censor: quote_spanned! { span =>
                    let #binding = #censorable::censor_with(#binding, __mapper);
                },
                inspect: quote_spanned! { span =>
                    #censorable::contains_match(#binding, __mapper)
                },
            }))
        }
    }
}

/// Joins field checks with `||`, or `false` when there are none.
pub(crate) fn any_of(checks: Vec<TokenStream>) -> TokenStream {
    checks
        .into_iter()
        .reduce(|acc, check| quote! { #acc || #check })
        .unwrap_or_else(|| quote! { false })
}
