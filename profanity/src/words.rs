//! Word lists and the provider capability the filter consumes.
//!
//! The filter never owns dictionary data. It asks a [`WordListProvider`] for
//! the list registered under a locale and matches against the patterns that
//! list carries.
//!
//! A [`WordList`] compiles one pattern per entry when it is built. Patterns
//! are literal, case-insensitive and bounded by word boundaries on both
//! sides, so `"bad"` matches `"BAD"` and `"bad!"` but not `"badge"`.

use std::{
    collections::HashMap,
    io::{self, BufRead},
    sync::Arc,
};

use regex::Regex;

/// Locale used when the caller does not pick one.
pub const DEFAULT_LOCALE: &str = "en";

/// An ordered list of words for one locale, with their compiled patterns.
///
/// Entries are trimmed and blank entries are dropped. Order is preserved:
/// masking applies patterns in the order the words were supplied.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<String>"))]
pub struct WordList {
    words: Vec<String>,
    patterns: Vec<Regex>,
}

impl WordList {
    /// Builds a word list from any sequence of string-like entries.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();
        // A word whose pattern does not compile stays listed but never matches.
        let patterns = words.iter().filter_map(|word| whole_word(word)).collect();
        Self { words, patterns }
    }

    /// Parses one word per line.
    ///
    /// Blank lines and comment lines are skipped. A comment is a line that is
    /// just `#` or starts with `# `, so entries such as `#hashtag` still load.
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        Self::new(text.lines().filter(|line| !is_comment(line)))
    }

    /// Reads one word per line from `reader`.
    ///
    /// Follows the same rules as [`WordList::from_lines`].
    pub fn read_from<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !is_comment(&line) {
                words.push(line);
            }
        }
        Ok(Self::new(words))
    }

    /// The words in list order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` when the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if any word occurs in `text` as a whole word.
    pub fn is_match(&self, text: &str) -> bool {
        !text.is_empty() && self.patterns.iter().any(|pattern| pattern.is_match(text))
    }

    pub(crate) fn patterns(&self) -> &[Regex] {
        &self.patterns
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<S: Into<String>> From<Vec<S>> for WordList {
    fn from(words: Vec<S>) -> Self {
        Self::new(words)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for WordList {
    fn from(words: [S; N]) -> Self {
        Self::new(words)
    }
}

fn is_comment(line: &str) -> bool {
    let line = line.trim();
    line == "#" || line.starts_with("# ")
}

fn whole_word(word: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word))).ok()
}

/// Supplies word lists by locale.
///
/// An absent or empty list means the locale is unsupported, and the filter
/// passes text through untouched.
pub trait WordListProvider {
    /// Returns the word list registered for `locale`, if any.
    fn words_for(&self, locale: &str) -> Option<&WordList>;

    /// Returns `true` if `text` contains any word registered for `locale`.
    ///
    /// The default implementation matches against [`WordListProvider::words_for`].
    fn matches(&self, locale: &str, text: &str) -> bool {
        self.words_for(locale)
            .is_some_and(|words| words.is_match(text))
    }
}

impl<P: WordListProvider + ?Sized> WordListProvider for &P {
    fn words_for(&self, locale: &str) -> Option<&WordList> {
        (**self).words_for(locale)
    }

    fn matches(&self, locale: &str, text: &str) -> bool {
        (**self).matches(locale, text)
    }
}

impl<P: WordListProvider + ?Sized> WordListProvider for Box<P> {
    fn words_for(&self, locale: &str) -> Option<&WordList> {
        (**self).words_for(locale)
    }

    fn matches(&self, locale: &str, text: &str) -> bool {
        (**self).matches(locale, text)
    }
}

impl<P: WordListProvider + ?Sized> WordListProvider for Arc<P> {
    fn words_for(&self, locale: &str) -> Option<&WordList> {
        (**self).words_for(locale)
    }

    fn matches(&self, locale: &str, text: &str) -> bool {
        (**self).matches(locale, text)
    }
}

/// In-memory provider keyed by exact locale identifier.
///
/// With the `serde` feature this deserializes from a JSON object mapping
/// locales to arrays of words:
///
/// ```json
/// { "en": ["darn", "heck"], "fr": ["zut"] }
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StaticWordLists {
    lists: HashMap<String, WordList>,
}

impl StaticWordLists {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `words` under `locale`, replacing any previous list.
    #[must_use]
    pub fn with_locale<W>(mut self, locale: impl Into<String>, words: W) -> Self
    where
        W: Into<WordList>,
    {
        self.insert(locale, words);
        self
    }

    /// Registers `words` under `locale` and returns the list it replaced.
    pub fn insert<W>(&mut self, locale: impl Into<String>, words: W) -> Option<WordList>
    where
        W: Into<WordList>,
    {
        self.lists.insert(locale.into(), words.into())
    }

    /// Removes the list registered under `locale`.
    pub fn remove(&mut self, locale: &str) -> Option<WordList> {
        self.lists.remove(locale)
    }

    /// Returns the list registered under `locale`.
    pub fn get(&self, locale: &str) -> Option<&WordList> {
        self.lists.get(locale)
    }

    /// Registered locales, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.lists.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Number of registered locales.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns `true` when no locale is registered.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl WordListProvider for StaticWordLists {
    fn words_for(&self, locale: &str) -> Option<&WordList> {
        self.get(locale)
    }
}

impl<L, W> FromIterator<(L, W)> for StaticWordLists
where
    L: Into<String>,
    W: Into<WordList>,
{
    fn from_iter<I: IntoIterator<Item = (L, W)>>(iter: I) -> Self {
        let mut lists = Self::new();
        for (locale, words) in iter {
            lists.insert(locale, words);
        }
        lists
    }
}

#[cfg(test)]
mod tests {
    use super::{StaticWordLists, WordList, WordListProvider};

    #[test]
    fn blank_entries_are_dropped_and_words_trimmed() {
        let list = WordList::new(["  darn ", "", "   ", "heck"]);
        assert_eq!(list.words(), ["darn", "heck"]);
        assert_eq!(list.patterns().len(), 2);
    }

    #[test]
    fn from_lines_skips_comments() {
        let list = WordList::from_lines("# english\ndarn\n\n  # another\nheck\n");
        assert_eq!(list.words(), ["darn", "heck"]);
    }

    #[test]
    fn hash_prefixed_words_are_not_comments() {
        let list = WordList::from_lines("#\n# note\n#hashtag\nheck\n");
        assert_eq!(list.words(), ["#hashtag", "heck"]);

        let list = WordList::read_from("#hashtag\n".as_bytes()).unwrap();
        assert_eq!(list.words(), ["#hashtag"]);
    }

    #[test]
    fn read_from_matches_from_lines() {
        let text = "darn\n# skip\nheck\n";
        let list = WordList::read_from(text.as_bytes()).unwrap();
        assert_eq!(list.words(), WordList::from_lines(text).words());
    }

    #[test]
    fn patterns_match_whole_words_only() {
        let list = WordList::new(["bad"]);
        assert!(list.is_match("that was BAD."));
        assert!(!list.is_match("a badge"));
        assert!(!list.is_match(""));
    }

    #[test]
    fn metacharacters_are_matched_literally() {
        let list = WordList::new(["a.b"]);
        assert!(list.is_match("a.b c"));
        assert!(!list.is_match("axb c"));
    }

    #[test]
    fn locales_are_sorted_and_exact() {
        let lists = StaticWordLists::new()
            .with_locale("fr", ["zut"])
            .with_locale("en", ["darn"]);
        assert_eq!(lists.locales(), ["en", "fr"]);
        assert!(lists.words_for("EN").is_none());
        assert!(lists.matches("fr", "oh zut"));
        assert!(!lists.matches("de", "oh zut"));
    }

    #[test]
    fn insert_returns_replaced_list() {
        let mut lists = StaticWordLists::new();
        assert!(lists.insert("en", ["darn"]).is_none());
        let previous = lists.insert("en", ["heck"]).unwrap();
        assert_eq!(previous.words(), ["darn"]);
        assert_eq!(lists.len(), 1);
    }
}
