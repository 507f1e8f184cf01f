//! Censoring structured values.
//!
//! Submitted content usually arrives as records (a question with a title and
//! a body, a comment thread) rather than as a single string. This module
//! walks such values and masks the text they hold:
//!
//! - **`mapper`**: the [`TextMapper`] seam between traversal and a filter
//! - **`censorable`**: the [`Censorable`] trait and its std container impls
//!
//! `#[derive(Censor)]` generates `Censorable` for user types. Only fields
//! annotated with `#[censor]` are visited; the rest pass through unchanged.

mod censorable;
mod mapper;

pub use censorable::Censorable;
pub use mapper::{censor, TextMapper};
