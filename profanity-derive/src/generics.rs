//! Generic type parameter handling and trait bound management.
//!
//! Only generics that appear in `#[censor]` fields receive a `Censorable`
//! bound. Of a `HashMap` or `BTreeMap`, only the value parameter counts.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is skipped when collecting generics:
//!
//! ```ignore
//! #[derive(Censor)]
//! struct Thread<E> {
//!     #[censor]
//!     posts: Vec<String>,
//!     _event: PhantomData<E>,
//! }
//! ```
//!
//! Without this, `Thread<Meetup>` would require `Meetup: Censorable` even
//! though no text of type `E` is ever walked.

use syn::{parse_quote, Ident};

use crate::crate_path;

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    let syn::Type::Path(path) = ty else {
        return;
    };
    let Some(segment) = path.path.segments.last() else {
        return;
    };
    if segment.ident == "PhantomData" {
        return;
    }

    if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
        let mut types = args.args.iter().filter_map(|arg| match arg {
            syn::GenericArgument::Type(inner_ty) => Some(inner_ty),
            _ => None,
        });
        if segment.ident == "HashMap" || segment.ident == "BTreeMap" {
            // Only map values are censored.
            if let Some(value_ty) = types.nth(1) {
                collect_generics_from_type(value_ty, generics, result);
            }
        } else {
            for inner_ty in types {
                collect_generics_from_type(inner_ty, generics, result);
            }
        }
    }

    for param in generics.type_params() {
        if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
            result.push(param.ident.clone());
        }
    }
}

/// Adds `Censorable` bounds to generic parameters used in censored fields.
pub(crate) fn add_censorable_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    let censorable_path = crate_path("Censorable");
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(#censorable_path));
        }
    }
    generics
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn collect(generics: proc_macro2::TokenStream, ty: proc_macro2::TokenStream) -> Vec<String> {
        let generics: syn::Generics = syn::parse2(generics).expect("should parse as Generics");
        let ty: syn::Type = syn::parse2(ty).expect("should parse as Type");
        let mut result = Vec::new();
        collect_generics_from_type(&ty, &generics, &mut result);
        result.into_iter().map(|ident| ident.to_string()).collect()
    }

    #[test]
    fn nested_generics_are_collected_once() {
        let found = collect(quote! { <T, U> }, quote! { Vec<Option<T>> });
        assert_eq!(found, ["T"]);

        let found = collect(quote! { <T, U> }, quote! { Vec<Box<U>> });
        assert_eq!(found, ["U"]);

        let found = collect(quote! { <T> }, quote! { Result<T, Option<T>> });
        assert_eq!(found, ["T"]);
    }

    #[test]
    fn map_keys_are_skipped() {
        let found = collect(quote! { <K, V> }, quote! { HashMap<K, V> });
        assert_eq!(found, ["V"]);

        let found = collect(quote! { <K, V> }, quote! { std::collections::BTreeMap<K, Vec<V>> });
        assert_eq!(found, ["V"]);

        let found = collect(quote! { <K, V, S> }, quote! { HashMap<K, V, S> });
        assert_eq!(found, ["V"]);
    }

    #[test]
    fn phantom_data_is_skipped() {
        let found = collect(quote! { <T> }, quote! { PhantomData<T> });
        assert!(found.is_empty());
    }

    #[test]
    fn concrete_types_collect_nothing() {
        let found = collect(quote! { <T> }, quote! { String });
        assert!(found.is_empty());
    }
}
