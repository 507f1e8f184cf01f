//! Container-level attribute checks for `#[derive(Censor)]`.
//!
//! `#[censor]` only has meaning on fields. Placing it on the struct or enum
//! itself is rejected rather than silently ignored.

use syn::{Attribute, Result};

pub(crate) fn reject_container_attrs(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("censor")) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            "#[censor] belongs on fields, not on the type itself",
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_is_accepted() {
        let attrs = parse_attrs(quote! { #[derive(Clone)] });
        assert!(reject_container_attrs(&attrs).is_ok());
    }

    #[test]
    fn censor_on_container_errors() {
        let attrs = parse_attrs(quote! { #[censor] });
        let err = reject_container_attrs(&attrs).unwrap_err();
        assert!(err.to_string().contains("belongs on fields"));
    }
}
