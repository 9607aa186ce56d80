// Invariants of the fixed phrase and glyph sets.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use valentine_cat::page::phrase_for;
use valentine_cat::{CELEBRATION_GLYPH, HEART_GLYPHS, QUESTION_RIBBON, REFUSAL_PHRASES};

#[test]
fn refusal_phrases_are_ten_unique_lines() {
    assert_eq!(REFUSAL_PHRASES.len(), 10);
    let mut seen = HashSet::new();
    for phrase in REFUSAL_PHRASES {
        assert!(!phrase.trim().is_empty(), "blank refusal phrase");
        assert!(seen.insert(*phrase), "duplicate refusal phrase '{}'", phrase);
    }
}

#[test]
fn phrase_index_is_capped_at_the_last_entry() {
    for attempts in 0..40u32 {
        let expected = REFUSAL_PHRASES[(attempts as usize).min(9)];
        assert_eq!(phrase_for(attempts), expected, "attempt {}", attempts);
    }
}

#[test]
fn heart_glyphs_are_five_distinct_emoji() {
    assert_eq!(HEART_GLYPHS.len(), 5);
    let unique: HashSet<&str> = HEART_GLYPHS.iter().copied().collect();
    assert_eq!(unique.len(), 5);
    for glyph in HEART_GLYPHS {
        assert!(!glyph.is_ascii(), "glyph '{}' should be an emoji", glyph);
    }
}

#[test]
fn decorative_sets_are_non_empty() {
    assert_eq!(QUESTION_RIBBON.len(), 5);
    assert!(!CELEBRATION_GLYPH.is_empty());
}
