//! Masking and detection over free-form text.
//!
//! [`ProfanityFilter`] looks up the word list for a locale and applies each
//! word's pattern in list order. Matches are rewritten by the configured
//! [`MaskPolicy`]. Spans rewritten by an earlier word are not shielded from
//! later words; with the default policy this never matters because the mask
//! character is not a word character.
//!
//! Both operations are total: an empty text or an unsupported locale passes
//! through unchanged (or reports no match).

use std::borrow::Cow;

use regex::Captures;

use crate::{
    censor::{Censorable, TextMapper},
    mask::MaskPolicy,
    words::{WordList, WordListProvider, DEFAULT_LOCALE},
};

/// Masks and detects profane words using lists from a [`WordListProvider`].
///
/// ```rust
/// use profanity::{ProfanityFilter, StaticWordLists};
///
/// let filter = ProfanityFilter::new(StaticWordLists::new().with_locale("en", ["bad"]));
/// assert_eq!(filter.mask("this is BAD", "en"), "this is B**");
/// assert!(filter.detect("this is bad", "en"));
/// ```
#[derive(Clone, Debug)]
pub struct ProfanityFilter<P> {
    provider: P,
    policy: MaskPolicy,
    default_locale: Cow<'static, str>,
}

impl<P: WordListProvider> ProfanityFilter<P> {
    /// Creates a filter with the default policy and the `"en"` default locale.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            policy: MaskPolicy::default(),
            default_locale: Cow::Borrowed(DEFAULT_LOCALE),
        }
    }

    /// Uses `policy` to rewrite matches.
    #[must_use]
    pub fn with_policy(mut self, policy: MaskPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Uses `locale` for the `*_default` operations and [`ProfanityFilter::censor`].
    #[must_use]
    pub fn with_default_locale(mut self, locale: impl Into<Cow<'static, str>>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// The word-list provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The policy used to rewrite matches.
    pub fn policy(&self) -> MaskPolicy {
        self.policy
    }

    /// The locale used by the `*_default` operations.
    pub fn default_locale_name(&self) -> &str {
        &self.default_locale
    }

    /// Masks every whole-word match of the `locale` word list in `text`.
    ///
    /// Returns the input borrowed when nothing was masked. The output has as
    /// many characters as the input.
    pub fn mask<'t>(&self, text: &'t str, locale: &str) -> Cow<'t, str> {
        match self.usable_words(text, locale) {
            Some(words) => mask_with(words, &self.policy, text),
            None => Cow::Borrowed(text),
        }
    }

    /// Returns `true` if any word of the `locale` list occurs in `text`.
    pub fn detect(&self, text: &str, locale: &str) -> bool {
        !text.is_empty() && self.provider.matches(locale, text)
    }

    /// [`ProfanityFilter::mask`] in the default locale.
    pub fn mask_default<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.mask(text, &self.default_locale)
    }

    /// [`ProfanityFilter::detect`] in the default locale.
    pub fn detect_default(&self, text: &str) -> bool {
        self.detect(text, &self.default_locale)
    }

    /// Binds this filter to `locale`.
    pub fn locale<'f>(&'f self, locale: &'f str) -> LocaleFilter<'f, P> {
        LocaleFilter {
            filter: self,
            locale,
        }
    }

    /// Binds this filter to its default locale.
    pub fn default_locale(&self) -> LocaleFilter<'_, P> {
        self.locale(&self.default_locale)
    }

    /// Masks every `#[censor]` text in `value` using the default locale.
    pub fn censor<T: Censorable>(&self, value: T) -> T {
        self.default_locale().censor(value)
    }

    fn usable_words(&self, text: &str, locale: &str) -> Option<&WordList> {
        if text.is_empty() {
            return None;
        }
        self.provider
            .words_for(locale)
            .filter(|words| !words.is_empty())
    }
}

fn mask_with<'t>(words: &WordList, policy: &MaskPolicy, text: &'t str) -> Cow<'t, str> {
    let mut filtered = Cow::Borrowed(text);
    for pattern in words.patterns() {
        let replaced = match pattern.replace_all(&filtered, |caps: &Captures<'_>| {
            policy.apply_to(&caps[0])
        }) {
            Cow::Borrowed(_) => None,
            Cow::Owned(replaced) => Some(replaced),
        };
        if let Some(replaced) = replaced {
            filtered = Cow::Owned(replaced);
        }
    }
    filtered
}

/// A [`ProfanityFilter`] bound to one locale.
///
/// This is the [`TextMapper`] handed to [`Censorable`] traversal.
#[derive(Debug)]
pub struct LocaleFilter<'f, P> {
    filter: &'f ProfanityFilter<P>,
    locale: &'f str,
}

impl<P> Clone for LocaleFilter<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for LocaleFilter<'_, P> {}

impl<'f, P: WordListProvider> LocaleFilter<'f, P> {
    /// The locale this filter is bound to.
    pub fn locale_name(&self) -> &'f str {
        self.locale
    }

    /// Masks `text` in this locale.
    pub fn mask<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.filter.mask(text, self.locale)
    }

    /// Detects profanity in `text` in this locale.
    pub fn detect(&self, text: &str) -> bool {
        self.filter.detect(text, self.locale)
    }

    /// Masks every `#[censor]` text in `value`.
    pub fn censor<T: Censorable>(&self, value: T) -> T {
        value.censor_with(self)
    }

    /// Returns `true` if any `#[censor]` text in `value` contains profanity.
    pub fn contains_profanity<T: Censorable>(&self, value: &T) -> bool {
        value.contains_match(self)
    }
}

impl<P: WordListProvider> TextMapper for LocaleFilter<'_, P> {
    fn map_text(&self, text: String) -> String {
        let masked = match self.mask(&text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(masked) => Some(masked),
        };
        masked.unwrap_or(text)
    }

    fn matches_text(&self, text: &str) -> bool {
        self.detect(text)
    }
}

/// Masks `text` with the default policy.
///
/// Shorthand for `ProfanityFilter::new(provider).mask(text, locale)`.
pub fn filter_profanity<'t, P: WordListProvider>(
    provider: P,
    text: &'t str,
    locale: &str,
) -> Cow<'t, str> {
    ProfanityFilter::new(provider).mask(text, locale)
}

/// Returns `true` if `text` contains a word from the `locale` list.
pub fn contains_profanity<P: WordListProvider>(provider: P, text: &str, locale: &str) -> bool {
    ProfanityFilter::new(provider).detect(text, locale)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{contains_profanity, filter_profanity, ProfanityFilter};
    use crate::{mask::MaskPolicy, words::StaticWordLists};

    fn english(words: &[&str]) -> ProfanityFilter<StaticWordLists> {
        ProfanityFilter::new(StaticWordLists::new().with_locale("en", words.to_vec()))
    }

    #[test]
    fn masks_keeping_first_letter_case() {
        let filter = english(&["bad"]);
        assert_eq!(filter.mask("this is BAD", "en"), "this is B**");
        assert_eq!(filter.mask("Bad bad bAd", "en"), "B** b** b**");
    }

    #[test]
    fn unchanged_text_is_borrowed() {
        let filter = english(&["bad"]);
        assert!(matches!(filter.mask("all good", "en"), Cow::Borrowed(_)));
        assert!(matches!(filter.mask("", "en"), Cow::Borrowed("")));
        assert!(matches!(filter.mask("bad", "xx"), Cow::Borrowed("bad")));
    }

    #[test]
    fn empty_word_list_passes_through() {
        let lists = StaticWordLists::new().with_locale("en", Vec::<String>::new());
        let filter = ProfanityFilter::new(lists);
        assert_eq!(filter.mask("bad", "en"), "bad");
        assert!(!filter.detect("bad", "en"));
    }

    #[test]
    fn detect_is_whole_word() {
        let filter = english(&["bad"]);
        assert!(filter.detect("this is bad", "en"));
        assert!(!filter.detect("this is fine", "en"));
        assert!(!filter.detect("badminton", "en"));
        assert!(!filter.detect("", "en"));
    }

    #[test]
    fn default_locale_can_be_changed() {
        let filter = ProfanityFilter::new(StaticWordLists::new().with_locale("fr", ["zut"]))
            .with_default_locale("fr");
        assert_eq!(filter.default_locale_name(), "fr");
        assert_eq!(filter.mask_default("oh zut"), "oh z**");
        assert!(filter.detect_default("Zut alors"));
    }

    #[test]
    fn custom_policy_is_applied() {
        let filter = english(&["heck"]).with_policy(MaskPolicy::mask_all().with_mask_char('#'));
        assert_eq!(filter.mask("what the heck", "en"), "what the ####");
    }

    #[test]
    fn free_functions_use_default_policy() {
        let lists = StaticWordLists::new().with_locale("en", ["darn"]);
        assert_eq!(filter_profanity(&lists, "Darn it", "en"), "D*** it");
        assert!(contains_profanity(&lists, "darn", "en"));
        assert!(!contains_profanity(&lists, "darn", "de"));
    }
}
