//! Adapters for emitting censored values through `slog`.
//!
//! This module connects [`Censorable`] with `slog` by providing a
//! `slog::Value` that serializes the censored form of a value as structured
//! JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from
//!   [`Censorable::censor_with`], not from the original value.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or pick a locale; callers pass the
//! [`TextMapper`] (usually a [`crate::LocaleFilter`]) to use.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::censor::{Censorable, TextMapper};

/// Placeholder logged when the censored value cannot be converted to JSON.
pub const SERIALIZE_FAILED_PLACEHOLDER: &str = "Failed to serialize censored value";

/// A `slog::Value` that emits an owned censored payload as structured JSON.
pub struct CensoredJson {
    value: JsonValue,
}

impl CensoredJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The JSON payload that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for CensoredJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their censored form as JSON.
///
/// ## Example
/// ```ignore
/// use profanity::slog::IntoCensoredJson;
///
/// let english = filter.locale("en");
/// info!(logger, "question posted"; "question" => question.into_censored_json(&english));
/// ```
pub trait IntoCensoredJson: Censorable + Serialize {
    /// Censors `self` with `mapper` and returns a `slog::Value` holding the
    /// result as JSON.
    ///
    /// If the conversion to `serde_json::Value` fails, the returned value holds
    /// [`SERIALIZE_FAILED_PLACEHOLDER`] as a JSON string.
    fn into_censored_json<M: TextMapper>(self, mapper: &M) -> CensoredJson {
        let censored = self.censor_with(mapper);
        let json_value = serde_json::to_value(censored)
            .unwrap_or_else(|_| JsonValue::String(SERIALIZE_FAILED_PLACEHOLDER.to_string()));
        CensoredJson::new(json_value)
    }
}

impl<T> IntoCensoredJson for T where T: Censorable + Serialize {}
