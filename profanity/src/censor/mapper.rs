//! The seam between traversal and text filtering.

use super::Censorable;

/// Rewrites and inspects individual strings during traversal.
///
/// [`crate::LocaleFilter`] is the implementation used by the filter. Other
/// implementations are useful for wrapping a filter with extra behavior
/// such as counting rewritten fields.
pub trait TextMapper {
    /// Returns the censored form of `text`.
    fn map_text(&self, text: String) -> String;

    /// Returns `true` if `text` would be censored.
    fn matches_text(&self, text: &str) -> bool;
}

impl<M: TextMapper + ?Sized> TextMapper for &M {
    fn map_text(&self, text: String) -> String {
        (**self).map_text(text)
    }

    fn matches_text(&self, text: &str) -> bool {
        (**self).matches_text(text)
    }
}

/// Censors `value` with `mapper`.
///
/// Equivalent to `value.censor_with(mapper)`.
#[must_use]
pub fn censor<T, M>(value: T, mapper: &M) -> T
where
    T: Censorable,
    M: TextMapper,
{
    value.censor_with(mapper)
}
