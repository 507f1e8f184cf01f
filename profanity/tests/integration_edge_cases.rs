//! Edge-case coverage for masking.
//!
//! These tests focus on Unicode text (multi-byte characters, non-Latin
//! scripts), on word lists with unusual entries, and on the sequential,
//! unprotected order in which word patterns are applied.

use profanity::{KeepConfig, MaskConfig, MaskPolicy, ProfanityFilter, StaticWordLists, WordList};

fn filter_for(locale: &str, words: &[&str]) -> ProfanityFilter<StaticWordLists> {
    ProfanityFilter::new(StaticWordLists::new().with_locale(locale, words.to_vec()))
}

#[test]
fn test_multibyte_words() {
    let filter = filter_for("es", &["coño"]);
    let masked = filter.mask("¡Coño!", "es");
    assert_eq!(masked, "¡C***!");
    assert_eq!(masked.chars().count(), "¡Coño!".chars().count());
}

#[test]
fn test_multibyte_first_character_is_kept_verbatim() {
    let filter = filter_for("ru", &["блин"]);
    assert_eq!(filter.mask("Ну БЛИН же", "ru"), "Ну Б*** же");
}

#[test]
fn test_accented_neighbours_are_word_characters() {
    // "é" is a word character, so "merdé" is a different word
    let filter = filter_for("fr", &["merde"]);
    assert_eq!(filter.mask("merdé merde", "fr"), "merdé m****");
}

#[test]
fn test_single_character_word_is_left_visible() {
    // The first character is always kept, so a one-letter match cannot change.
    let filter = filter_for("en", &["x"]);
    assert_eq!(filter.mask("x marks the spot", "en"), "x marks the spot");
    assert!(filter.detect("x marks the spot", "en"));
}

#[test]
fn test_multi_word_entries() {
    let filter = filter_for("en", &["bad word"]);
    assert_eq!(filter.mask("a BAD WORD here", "en"), "a B******* here");
    assert_eq!(filter.mask("a bad  word here", "en"), "a bad  word here");
}

#[test]
fn test_regex_metacharacters_are_literal() {
    let filter = filter_for("en", &["d.rn", "h(e)ck"]);
    assert_eq!(filter.mask("darn d.rn", "en"), "darn d***");
    assert_eq!(filter.mask("heck h(e)ck", "en"), "heck h*****");
}

#[test]
fn test_blank_entries_never_match() {
    let filter = filter_for("en", &["", "   ", "darn"]);
    assert_eq!(filter.mask("   darn   ", "en"), "   d***   ");
}

#[test]
fn test_patterns_apply_in_list_order() {
    let text = "a bad word here";

    let phrase_first = filter_for("en", &["bad word", "word"]);
    assert_eq!(phrase_first.mask(text, "en"), "a b******* here");

    let word_first = filter_for("en", &["word", "bad word"]);
    assert_eq!(word_first.mask(text, "en"), "a bad w*** here");
}

#[test]
fn test_masked_spans_are_not_protected() {
    // A later pattern may match text produced by an earlier mask.
    let lists = StaticWordLists::new().with_locale("en", WordList::new(["darn", "dxxx yo"]));
    let filter =
        ProfanityFilter::new(lists).with_policy(MaskPolicy::keep_first(1).with_mask_char('x'));

    assert_eq!(filter.mask("darn yo", "en"), "dxxxxxx");
    assert_eq!(filter.mask("yo darn", "en"), "yo dxxx");
}

#[test]
fn test_keep_last_policy_across_scripts() {
    let filter = filter_for("ja", &["ばか"]).with_policy(MaskPolicy::keep_last(1));
    assert_eq!(filter.mask("ばか", "ja"), "*か");
}

#[test]
fn test_newlines_and_tabs_are_boundaries() {
    let filter = filter_for("en", &["heck"]);
    assert_eq!(filter.mask("heck\theck\nheck", "en"), "h***\th***\nh***");
}

#[test]
fn test_oversized_policy_counts_do_not_panic() {
    let keep = filter_for("en", &["bad"])
        .with_policy(MaskPolicy::Keep(KeepConfig::both(usize::MAX, 1)));
    assert_eq!(keep.mask("this is bad", "en"), "this is bad");

    let mask = filter_for("en", &["bad"])
        .with_policy(MaskPolicy::Mask(MaskConfig::both(usize::MAX, 1)));
    assert_eq!(mask.mask("this is bad", "en"), "this is ***");
}
