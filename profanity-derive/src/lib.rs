//! Derive macros for `profanity`.
//!
//! This crate generates the traversal code behind `#[derive(Censor)]`. It:
//! - reads `#[censor]` field attributes
//! - emits a `Censorable` implementation that hands each marked field to a
//!   `TextMapper`
//!
//! It does **not** match or mask anything. Word lists and policies live in the
//! main `profanity` crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
mod types;
use container::reject_container_attrs;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_censorable_bounds;

/// Derives `profanity::Censorable` for structs and enums.
///
/// # Field Attributes
///
/// - **No annotation**: The field passes through unchanged. Use this for ids,
///   vote counts, timestamps and any external type.
///
/// - `#[censor]`: The field holds user text and is walked with `Censorable`.
///   Works for `String`, `Cow<'_, str>`, `Option<_>`, `Vec<_>`, `Box<_>`, maps
///   (values only), sets, and nested types that derive `Censor`.
///
/// Scalars and borrowed fields marked `#[censor]` are rejected at compile
/// time, as are unions and `#[censor]` on the type itself.
///
/// Generic parameters that appear in `#[censor]` fields (outside
/// `PhantomData`) are bounded by `Censorable`.
#[proc_macro_derive(Censor, attributes(censor))]
pub fn derive_censor(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the profanity crate root.
///
/// Handles crate renaming (e.g., `my_filter = { package = "profanity", ... }`)
/// and internal usage (when the derive is used inside the profanity crate).
fn crate_root() -> proc_macro2::TokenStream {
    match crate_name("profanity") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::profanity },
    }
}

fn crate_path(item: &str) -> proc_macro2::TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

fn expand(input: DeriveInput) -> Result<proc_macro2::TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    reject_container_attrs(&attrs)?;

    let (censor_body, inspect_body, used_generics) = match data {
        Data::Struct(data) => {
            let output = derive_struct(data, &generics)?;
            (output.censor_body, output.inspect_body, output.used_generics)
        }
        Data::Enum(data) => {
            let output = derive_enum(data, &generics)?;
            (output.censor_body, output.inspect_body, output.used_generics)
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Censor` cannot be derived for unions",
            ));
        }
    };

    let bounded = add_censorable_bounds(generics, &used_generics);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();
    let censorable = crate_path("Censorable");
    let text_mapper = crate_path("TextMapper");

    Ok(quote! {
        impl #impl_generics #censorable for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn censor_with<M: #text_mapper>(self, __mapper: &M) -> Self {
                #censor_body
            }

            #[allow(unused_variables)]
            fn contains_match<M: #text_mapper>(&self, __mapper: &M) -> bool {
                #inspect_body
            }
        }
    })
}
