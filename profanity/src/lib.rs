//! Locale-aware profanity masking for user-submitted text.
//!
//! The crate separates:
//! - **Word lists**: which words are profane, per locale. Supplied by the
//!   caller through a [`WordListProvider`]; no dictionary is bundled.
//! - **Policy**: how a matched word is rewritten ([`MaskPolicy`]). The default
//!   keeps the first character and masks the rest with `*`.
//!
//! [`ProfanityFilter`] combines the two. Matching is whole-word and
//! case-insensitive, masking preserves the length of the text, and both
//! operations are total: empty text or an unsupported locale passes through.
//!
//! ```rust
//! use profanity::{ProfanityFilter, StaticWordLists};
//!
//! let lists = StaticWordLists::new().with_locale("en", ["bad"]);
//! let filter = ProfanityFilter::new(lists);
//!
//! assert_eq!(filter.mask("this is BAD", "en"), "this is B**");
//! assert_eq!(filter.mask("hello world", "xx"), "hello world");
//! assert!(!filter.detect("this is fine", "en"));
//! ```
//!
//! Structured values are censored with `#[derive(Censor)]`, which walks
//! fields marked `#[censor]` (see [`Censorable`]).
//!
//! What this crate does not do:
//! - perform I/O other than reading a word list from a caller-supplied reader
//! - log on its own (see the `slog` feature for logging censored values)

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
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use profanity_derive::Censor;

#[allow(unused_extern_crates)]
extern crate self as profanity;

// Module declarations
mod censor;
mod filter;
mod mask;
#[cfg(feature = "slog")]
pub mod slog;
mod words;

// Re-exports
pub use censor::{censor, Censorable, TextMapper};
pub use filter::{contains_profanity, filter_profanity, LocaleFilter, ProfanityFilter};
pub use mask::{KeepConfig, MaskConfig, MaskPolicy, DEFAULT_MASK_CHAR};
pub use words::{StaticWordLists, WordList, WordListProvider, DEFAULT_LOCALE};
