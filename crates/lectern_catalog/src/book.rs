//! Book descriptors.
//!
//! A [`BookDescriptor`] is the engine's immutable view of one book: its
//! canonical name, localized display name, classification, per-provider
//! external codes and per-chapter verse counts.

use std::fmt;

use im::{HashMap as ImHashMap, OrdMap};
use lectern_foundation::ProviderId;

/// Verse count used for chapters missing from a book's verse-count table.
pub const DEFAULT_VERSE_COUNT: u32 = 25;

/// Which testament a book belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Testament {
    /// Hebrew scriptures.
    Old,
    /// Christian scriptures.
    New,
}

/// Literary classification of a book.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Genre {
    /// Pentateuch.
    Law,
    /// Historical narrative.
    History,
    /// Poetry and wisdom literature.
    Wisdom,
    /// Major and minor prophets.
    Prophecy,
    /// The four gospels.
    Gospel,
    /// Letters.
    Epistle,
    /// Revelation.
    Apocalyptic,
    /// Books missing from the catalog.
    Unclassified,
}

/// Immutable description of one book.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookDescriptor {
    canonical_name: String,
    localized_name: String,
    testament: Testament,
    genre: Genre,
    chapter_count: u32,
    aliases: Vec<String>,
    provider_codes: ImHashMap<ProviderId, String>,
    verse_counts: OrdMap<u32, u32>,
    default_verse_count: u32,
    listed: bool,
}

impl BookDescriptor {
    /// Creates a descriptor with no provider codes and no verse-count table.
    #[must_use]
    pub fn new(
        canonical_name: impl Into<String>,
        localized_name: impl Into<String>,
        testament: Testament,
        genre: Genre,
    ) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            localized_name: localized_name.into(),
            testament,
            genre,
            chapter_count: 0,
            aliases: Vec::new(),
            provider_codes: ImHashMap::new(),
            verse_counts: OrdMap::new(),
            default_verse_count: DEFAULT_VERSE_COUNT,
            listed: true,
        }
    }

    /// Builds a descriptor for a book the catalog does not know.
    ///
    /// The result has no provider codes, so every adapter skips it, and it
    /// classifies as an unclassified new-testament book.
    #[must_use]
    pub fn unlisted(name: &str) -> Self {
        let display = name.split_whitespace().collect::<Vec<_>>().join(" ");
        let mut book = Self::new(
            crate::catalog::lookup_key(&display),
            display,
            Testament::New,
            Genre::Unclassified,
        );
        book.listed = false;
        book
    }

    /// Sets the external code used by one provider.
    #[must_use]
    pub fn with_provider_code(mut self, provider: ProviderId, code: impl Into<String>) -> Self {
        self.provider_codes.insert(provider, code.into());
        self
    }

    /// Sets the per-chapter verse counts, chapter 1 first.
    ///
    /// Also sets the chapter count to the table length.
    #[must_use]
    pub fn with_verse_counts(mut self, counts: &[u32]) -> Self {
        self.verse_counts = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| (u32::try_from(i + 1).unwrap_or(u32::MAX), count))
            .collect();
        self.chapter_count = u32::try_from(counts.len()).unwrap_or(u32::MAX);
        self
    }

    /// Overrides the verse count for a single chapter.
    #[must_use]
    pub fn with_verse_count(mut self, chapter: u32, count: u32) -> Self {
        self.verse_counts.insert(chapter, count);
        self.chapter_count = self.chapter_count.max(chapter);
        self
    }

    /// Sets the number of chapters.
    #[must_use]
    pub fn with_chapter_count(mut self, chapter_count: u32) -> Self {
        self.chapter_count = chapter_count;
        self
    }

    /// Sets the verse count used for chapters missing from the table.
    #[must_use]
    pub fn with_default_verse_count(mut self, count: u32) -> Self {
        self.default_verse_count = count;
        self
    }

    /// Adds a lookup alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        if !self.aliases.contains(&alias) {
            self.aliases.push(alias);
        }
        self
    }

    /// Canonical identifier shared by the catalog and every provider.
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// Display name placed in every returned verse.
    #[must_use]
    pub fn localized_name(&self) -> &str {
        &self.localized_name
    }

    /// Testament the book belongs to.
    #[must_use]
    pub const fn testament(&self) -> Testament {
        self.testament
    }

    /// Literary classification.
    #[must_use]
    pub const fn genre(&self) -> Genre {
        self.genre
    }

    /// Number of chapters, or 0 if unknown.
    #[must_use]
    pub const fn chapter_count(&self) -> u32 {
        self.chapter_count
    }

    /// Alternate names this book can be looked up by.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// External code for a provider, if that provider carries this book.
    #[must_use]
    pub fn provider_code(&self, provider: ProviderId) -> Option<&str> {
        self.provider_codes.get(&provider).map(String::as_str)
    }

    /// Verse count from the table, if the chapter is listed.
    #[must_use]
    pub fn known_verse_count(&self, chapter: u32) -> Option<u32> {
        self.verse_counts.get(&chapter).copied()
    }

    /// Verse count for a chapter, falling back to the default count.
    #[must_use]
    pub fn verse_count(&self, chapter: u32) -> u32 {
        self.known_verse_count(chapter)
            .unwrap_or(self.default_verse_count)
    }

    /// The fallback verse count.
    #[must_use]
    pub const fn default_verse_count(&self) -> u32 {
        self.default_verse_count
    }

    /// Iterates `(chapter, count)` pairs in chapter order.
    pub fn verse_counts(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.verse_counts.iter().map(|(&chapter, &count)| (chapter, count))
    }

    /// Returns false for descriptors built by [`BookDescriptor::unlisted`].
    #[must_use]
    pub const fn is_listed(&self) -> bool {
        self.listed
    }
}

impl fmt::Display for BookDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.localized_name)
    }
}
