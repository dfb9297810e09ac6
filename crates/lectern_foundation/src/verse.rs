//! The canonical verse record and chapter normalization.
//!
//! Every provider and the synthesizer produce [`Verse`] values. Before a
//! provider's chapter is accepted it is passed through [`normalize_chapter`]
//! and checked with [`is_canonical_chapter`]: verse numbers must be unique,
//! contiguous, start at 1 and ascend. Source numbers are never rewritten.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single verse of resolved content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Verse {
    /// Localized display name of the book.
    pub book: String,
    /// Chapter number (1-indexed).
    pub chapter: u32,
    /// Verse number (1-indexed).
    pub verse: u32,
    /// Verse text.
    pub text: String,
    /// Translation code the text was resolved for.
    pub version: String,
}

impl Verse {
    /// Creates a new verse record.
    #[must_use]
    pub fn new(
        book: impl Into<String>,
        chapter: u32,
        verse: u32,
        text: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
            text: text.into(),
            version: version.into(),
        }
    }

    /// Returns the human-readable reference, e.g. `John 3:16`.
    #[must_use]
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// An ordered list of verses, usually one chapter.
pub type VerseList = Vec<Verse>;

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verse, self.text)
    }
}

/// Reshapes a provider's verse list into a canonical chapter.
///
/// Blank texts and verse 0 are dropped, texts are trimmed, verses are sorted
/// by their source number (stable, so the first duplicate wins) and
/// duplicates removed. Verse numbers are kept as the source gave them; a gap
/// survives normalization and fails [`is_canonical_chapter`]. Book, chapter
/// and version are overwritten so every record agrees with the request.
#[must_use]
pub fn normalize_chapter(verses: VerseList, book: &str, chapter: u32, version: &str) -> VerseList {
    let mut kept: VerseList = verses
        .into_iter()
        .filter_map(|mut v| {
            let trimmed = v.text.trim();
            if v.verse == 0 || trimmed.is_empty() {
                return None;
            }
            if trimmed.len() != v.text.len() {
                v.text = trimmed.to_string();
            }
            Some(v)
        })
        .collect();

    kept.sort_by_key(|v| v.verse);
    kept.dedup_by_key(|v| v.verse);

    for v in &mut kept {
        v.chapter = chapter;
        book.clone_into(&mut v.book);
        version.clone_into(&mut v.version);
    }

    kept
}

/// Returns true if the verses satisfy the chapter invariant.
///
/// The list must be non-empty and numbered exactly `1..=len` in order.
#[must_use]
pub fn is_canonical_chapter(verses: &[Verse]) -> bool {
    !verses.is_empty()
        && verses
            .iter()
            .enumerate()
            .all(|(i, v)| usize::try_from(v.verse).is_ok_and(|n| n == i + 1))
}
