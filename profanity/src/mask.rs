//! Length-preserving masking policies for matched words.
//!
//! Policies are pure string transformations over a single matched token. They
//! do not search text or decide what is profane. Every policy replaces
//! characters one-for-one, so a masked token has exactly as many Unicode
//! scalar values as the match it replaces.

/// Default symbol used to hide characters.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Configuration that keeps selected segments visible while masking the remainder.
///
/// If the configuration keeps the entire token visible, the token is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeepConfig {
    /// Number of leading characters to keep visible.
    visible_prefix: usize,
    /// Number of trailing characters to keep visible.
    visible_suffix: usize,
    mask_char: char,
}

impl KeepConfig {
    /// Keeps only the first `visible_prefix` characters.
    #[must_use]
    pub fn first(visible_prefix: usize) -> Self {
        Self::both(visible_prefix, 0)
    }

    /// Keeps only the last `visible_suffix` characters.
    #[must_use]
    pub fn last(visible_suffix: usize) -> Self {
        Self::both(0, visible_suffix)
    }

    /// Keeps both leading and trailing characters visible.
    ///
    /// If `visible_prefix + visible_suffix >= total_length`, nothing is masked.
    /// The sum saturates, so oversized counts never panic.
    #[must_use]
    pub fn both(visible_prefix: usize, visible_suffix: usize) -> Self {
        Self {
            visible_prefix,
            visible_suffix,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub(crate) fn apply_to(&self, token: &str) -> String {
        let mut chars: Vec<char> = token.chars().collect();
        let total = chars.len();
        if self.visible_prefix.saturating_add(self.visible_suffix) >= total {
            return token.to_string();
        }

        for ch in &mut chars[self.visible_prefix..(total - self.visible_suffix)] {
            *ch = self.mask_char;
        }
        chars.into_iter().collect()
    }
}

/// Configuration that masks selected segments while leaving the remainder unchanged.
///
/// If the masked spans cover the whole token, every character is masked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_field_names)]
pub struct MaskConfig {
    /// Number of leading characters to mask.
    mask_prefix: usize,
    /// Number of trailing characters to mask.
    mask_suffix: usize,
    mask_char: char,
}

impl MaskConfig {
    /// Masks only the first `mask_prefix` characters.
    #[must_use]
    pub fn first(mask_prefix: usize) -> Self {
        Self::both(mask_prefix, 0)
    }

    /// Masks only the last `mask_suffix` characters.
    #[must_use]
    pub fn last(mask_suffix: usize) -> Self {
        Self::both(0, mask_suffix)
    }

    /// Masks both leading and trailing characters.
    #[must_use]
    pub fn both(mask_prefix: usize, mask_suffix: usize) -> Self {
        Self {
            mask_prefix,
            mask_suffix,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub(crate) fn apply_to(&self, token: &str) -> String {
        let mut chars: Vec<char> = token.chars().collect();
        let total = chars.len();
        if self.mask_prefix.saturating_add(self.mask_suffix) >= total {
            chars.fill(self.mask_char);
            return chars.into_iter().collect();
        }

        chars[..self.mask_prefix].fill(self.mask_char);
        chars[total - self.mask_suffix..].fill(self.mask_char);
        chars.into_iter().collect()
    }
}

/// How a matched word is rewritten.
///
/// The default keeps the first character and masks the rest with `*`, so
/// `"Darn"` becomes `"D***"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskPolicy {
    /// Keep configured segments visible while masking everything else.
    Keep(KeepConfig),
    /// Mask configured segments while leaving the remainder untouched.
    Mask(MaskConfig),
}

impl MaskPolicy {
    /// Keeps only the first `visible_prefix` characters of each match.
    #[must_use]
    pub fn keep_first(visible_prefix: usize) -> Self {
        Self::Keep(KeepConfig::first(visible_prefix))
    }

    /// Keeps only the last `visible_suffix` characters of each match.
    #[must_use]
    pub fn keep_last(visible_suffix: usize) -> Self {
        Self::Keep(KeepConfig::last(visible_suffix))
    }

    /// Masks every character of each match.
    #[must_use]
    pub fn mask_all() -> Self {
        Self::Keep(KeepConfig::first(0))
    }

    /// Masks the first `mask_prefix` characters of each match.
    #[must_use]
    pub fn mask_first(mask_prefix: usize) -> Self {
        Self::Mask(MaskConfig::first(mask_prefix))
    }

    /// Masks the last `mask_suffix` characters of each match.
    #[must_use]
    pub fn mask_last(mask_suffix: usize) -> Self {
        Self::Mask(MaskConfig::last(mask_suffix))
    }

    /// Overrides the masking character.
    #[must_use]
    pub fn with_mask_char(self, mask_char: char) -> Self {
        match self {
            Self::Keep(config) => Self::Keep(config.with_mask_char(mask_char)),
            Self::Mask(config) => Self::Mask(config.with_mask_char(mask_char)),
        }
    }

    /// Rewrites one matched token.
    ///
    /// The result always has as many characters as `token`.
    #[must_use]
    pub fn apply_to(&self, token: &str) -> String {
        match self {
            Self::Keep(config) => config.apply_to(token),
            Self::Mask(config) => config.apply_to(token),
        }
    }
}

impl Default for MaskPolicy {
    fn default() -> Self {
        Self::keep_first(1)
    }
}

#[cfg(test)]
mod tests {
    use super::{KeepConfig, MaskConfig, MaskPolicy};

    #[test]
    fn default_keeps_first_character() {
        assert_eq!(MaskPolicy::default().apply_to("Darn"), "D***");
        assert_eq!(MaskPolicy::default().apply_to("BAD"), "B**");
    }

    #[test]
    fn single_character_token_is_unchanged_by_default() {
        assert_eq!(MaskPolicy::default().apply_to("x"), "x");
    }

    #[test]
    fn keep_policy_respects_mask_char() {
        let policy = MaskPolicy::keep_first(2).with_mask_char('#');
        assert_eq!(policy.apply_to("abcdef"), "ab####");
    }

    #[test]
    fn mask_all_hides_everything() {
        assert_eq!(MaskPolicy::mask_all().apply_to("heck"), "****");
    }

    #[test]
    fn mask_policy_masks_first_and_last_segments() {
        assert_eq!(MaskPolicy::mask_first(2).apply_to("abcdef"), "**cdef");
        assert_eq!(MaskPolicy::mask_last(3).apply_to("abcdef"), "abc***");
    }

    #[test]
    fn keep_both_overlap_keeps_entire_token() {
        let policy = MaskPolicy::Keep(KeepConfig::both(2, 2));
        assert_eq!(policy.apply_to("abc"), "abc");
        assert_eq!(policy.apply_to("abcdef"), "ab**ef");
    }

    #[test]
    fn mask_both_overlap_masks_entire_token() {
        let policy = MaskPolicy::Mask(MaskConfig::both(2, 2));
        assert_eq!(policy.apply_to("abcd"), "****");
        assert_eq!(policy.apply_to("abcdef"), "**cd**");
    }

    #[test]
    fn policies_preserve_character_count() {
        for policy in [
            MaskPolicy::default(),
            MaskPolicy::keep_last(2),
            MaskPolicy::mask_first(1),
            MaskPolicy::mask_all().with_mask_char('•'),
        ] {
            let masked = policy.apply_to("Schei\u{df}e");
            assert_eq!(masked.chars().count(), "Schei\u{df}e".chars().count());
        }
    }

    #[test]
    fn oversized_counts_saturate() {
        let keep = MaskPolicy::Keep(KeepConfig::both(usize::MAX, 1));
        assert_eq!(keep.apply_to("bad"), "bad");

        let mask = MaskPolicy::Mask(MaskConfig::both(usize::MAX, 1));
        assert_eq!(mask.apply_to("bad"), "***");

        let mask = MaskPolicy::Mask(MaskConfig::both(1, usize::MAX));
        assert_eq!(mask.apply_to(""), "");
    }

    #[test]
    fn empty_token_stays_empty() {
        assert_eq!(MaskPolicy::default().apply_to(""), "");
        assert_eq!(MaskPolicy::mask_first(3).apply_to(""), "");
    }
}
