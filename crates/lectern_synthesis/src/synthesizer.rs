//! The canonical content synthesizer.
//!
//! Last resort of every resolution. For a curated `(book, chapter)` the
//! authored text is returned verbatim; otherwise the chapter is generated
//! with exactly as many verses as the catalog lists for it (or the book's
//! default count), each text a pure function of category and verse number.

use lectern_catalog::BookDescriptor;
use lectern_foundation::{Error, ErrorContext, Result, Verse, VerseList};

use crate::category::{PhraseCategory, select_phrase};
use crate::curated::curated_chapter;

/// Generated text for one verse.
///
/// The book contributes only through its [`PhraseCategory`], so the same
/// `(category, verse)` pair always yields byte-identical text.
#[must_use]
pub fn generated_text(category: PhraseCategory, verse: u32) -> String {
    format!("{}, {}", select_phrase(category, verse), category.closing())
}

/// Produces chapters without external dependencies.
#[derive(Clone, Copy, Debug, Default)]
pub struct Synthesizer;

impl Synthesizer {
    /// Creates a synthesizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns true if the chapter is served from the curated corpus.
    #[must_use]
    pub fn is_curated(&self, book: &BookDescriptor, chapter: u32) -> bool {
        curated_chapter(book.canonical_name(), chapter).is_some()
    }

    /// Produces a full chapter, sorted by verse number.
    ///
    /// Every verse carries the book's localized name and `version`.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisFailure` only for chapter 0 or a zero verse count,
    /// both of which indicate a bug upstream rather than an external condition.
    pub fn synthesize(&self, book: &BookDescriptor, chapter: u32, version: &str) -> Result<VerseList> {
        let context = || {
            ErrorContext::new()
                .with_book(book.localized_name())
                .with_chapter(chapter)
        };

        if chapter == 0 {
            return Err(Error::synthesis_failure("chapter 0 cannot be synthesized").with_context(context()));
        }

        let name = book.localized_name();
        let mut verses: VerseList = if let Some(entry) = curated_chapter(book.canonical_name(), chapter) {
            entry
                .verses
                .iter()
                .zip(1u32..)
                .map(|(text, number)| Verse::new(name, chapter, number, *text, version))
                .collect()
        } else {
            let count = book.verse_count(chapter);
            if count == 0 {
                return Err(Error::synthesis_failure("verse count is zero").with_context(context()));
            }
            let category = PhraseCategory::for_book(book);
            (1..=count)
                .map(|number| Verse::new(name, chapter, number, generated_text(category, number), version))
                .collect()
        };

        if verses.is_empty() {
            return Err(Error::synthesis_failure("no verses produced").with_context(context()));
        }

        verses.sort_by_key(|v| v.verse);
        Ok(verses)
    }
}
