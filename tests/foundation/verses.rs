//! Integration tests for verse records and chapter normalization

use lectern_foundation::{Verse, is_canonical_chapter, normalize_chapter};
use proptest::prelude::*;

fn raw(n: u32, text: &str) -> Verse {
    Verse::new("raw", 99, n, text, "RAW")
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn verse_display_and_reference() {
    let v = Verse::new("John", 11, 35, "Jesus wept.", "KJV");
    assert_eq!(v.to_string(), "35 Jesus wept.");
    assert_eq!(v.reference(), "John 11:35");
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn gaps_are_kept() {
    let verses = vec![raw(9, "i"), raw(2, "b"), raw(5, "e")];
    let normalized = normalize_chapter(verses, "Ruth", 2, "WEB");
    let numbers: Vec<u32> = normalized.iter().map(|v| v.verse).collect();
    assert_eq!(numbers, vec![2, 5, 9]);
    assert_eq!(normalized[1].text, "e");
    assert!(!is_canonical_chapter(&normalized));
    assert!(normalized.iter().all(|v| v.book == "Ruth" && v.chapter == 2 && v.version == "WEB"));
}

#[test]
fn complete_chapter_out_of_order_is_canonical() {
    let verses = vec![raw(3, "c"), raw(1, "a"), raw(2, "b"), raw(2, "again")];
    let normalized = normalize_chapter(verses, "Ruth", 2, "WEB");
    assert!(is_canonical_chapter(&normalized));
    assert_eq!(normalized[1].text, "b");
}

#[test]
fn all_blank_is_empty() {
    let normalized = normalize_chapter(vec![raw(1, ""), raw(2, " \t ")], "Ruth", 1, "KJV");
    assert!(normalized.is_empty());
    assert!(!is_canonical_chapter(&normalized));
}

#[test]
fn canonical_check_rejects_gaps() {
    let verses = vec![raw(1, "a"), raw(3, "c")];
    assert!(!is_canonical_chapter(&verses));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn normalization_keeps_each_verse_with_its_number(
        entries in prop::collection::vec((0u32..200, "[a-z ]{0,12}"), 0..60)
    ) {
        let verses: Vec<Verse> = entries.iter().map(|(n, text)| raw(*n, text)).collect();
        let usable = entries.iter().any(|(n, text)| *n > 0 && !text.trim().is_empty());
        let normalized = normalize_chapter(verses, "Mark", 4, "KJV");

        prop_assert_eq!(!normalized.is_empty(), usable);
        prop_assert!(normalized.windows(2).all(|pair| pair[0].verse < pair[1].verse));
        prop_assert!(normalized.iter().all(|v| !v.text.is_empty() && v.text.trim() == v.text));
        for v in &normalized {
            let first = entries
                .iter()
                .find(|(n, text)| *n == v.verse && !text.trim().is_empty())
                .map(|(_, text)| text.trim());
            prop_assert_eq!(first, Some(v.text.as_str()));
        }
    }

    #[test]
    fn shuffled_complete_chapters_are_canonical(
        texts in prop::collection::vec("[a-z]{1,8}", 1..40),
        seed in any::<u64>()
    ) {
        let mut verses: Vec<Verse> = texts.iter().zip(1u32..).map(|(text, n)| raw(n, text)).collect();
        let len = verses.len();
        verses.rotate_left(usize::try_from(seed % len as u64).unwrap());
        let normalized = normalize_chapter(verses, "Mark", 4, "KJV");

        prop_assert!(is_canonical_chapter(&normalized));
        let expected: Vec<&str> = texts.iter().map(String::as_str).collect();
        let actual: Vec<&str> = normalized.iter().map(|v| v.text.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn normalization_is_idempotent(
        entries in prop::collection::vec((1u32..50, "[a-z]{1,8}"), 1..30)
    ) {
        let verses: Vec<Verse> = entries.iter().map(|(n, text)| raw(*n, text)).collect();
        let once = normalize_chapter(verses, "Mark", 4, "KJV");
        let twice = normalize_chapter(once.clone(), "Mark", 4, "KJV");
        prop_assert_eq!(once, twice);
    }
}
