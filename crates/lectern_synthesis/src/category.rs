//! Phrase categories and deterministic phrase selection.
//!
//! Generated verses are built from a fixed phrase list per category plus a
//! closing clause. Selection is by verse number modulo list length and is
//! intentionally non-random: identical inputs always give identical text.

use lectern_catalog::{BookDescriptor, Genre, Testament};

/// Category of generated text, derived from a book's classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PhraseCategory {
    /// Poetry and wisdom books.
    Poetic,
    /// Prophetic books of the old testament.
    Prophetic,
    /// Remaining old testament books.
    OldTestament,
    /// New testament books, and any book the catalog does not know.
    NewTestament,
}

const POETIC: &[&str] = &[
    "Let every voice lift a song of praise",
    "Wisdom calls aloud in the streets and is found by those who seek her",
    "The heart that waits in stillness is not forsaken",
    "As the rivers run to the sea, so the upright turn toward the light",
    "Understanding is a well of life to the one who has it",
    "Morning by morning mercy is made new",
    "The humble shall hear of it and be glad",
    "A gentle answer turns the heart toward peace",
];

const PROPHETIC: &[&str] = &[
    "Behold, the days are coming when justice shall roll down like waters",
    "Return to me, and I will return to you",
    "The word came in the night, and the watchman stood upon the wall",
    "Prepare the way, make straight the paths in the desert",
    "A remnant shall return and build again the ancient ruins",
    "Hear this, all you who dwell in the land",
    "The mountains shall drip with sweet wine in that day",
    "I will gather the scattered ones and bring them home",
];

const OLD_TESTAMENT: &[&str] = &[
    "And the people gathered at the gate of the city",
    "Then they set out from that place and journeyed on",
    "And the elders of the land came together to hear the matter",
    "So they built an altar there and called upon the name of the Lord",
    "And there was peace in the land for many years",
    "Then the tribes went up, each to his own inheritance",
    "And they kept the statutes that had been commanded them",
    "And the account of these things was written in the book of the chronicles",
];

const NEW_TESTAMENT: &[&str] = &[
    "And he went up on the mountain and taught those who came to him",
    "Grace and peace be with you from the one who calls you",
    "And the disciples came together and broke bread with gladness",
    "Walk in love, as children of light",
    "And the crowds followed him from every town and village",
    "Be steadfast, abounding always in good work",
    "And they went out and proclaimed the good news everywhere",
    "Let brotherly love continue among you",
];

impl PhraseCategory {
    /// Classifies a book.
    ///
    /// Wisdom books are poetic, prophecy in the old testament is prophetic,
    /// the rest of the old testament is general, and everything else
    /// (including unlisted books) is new testament.
    #[must_use]
    pub fn for_book(book: &BookDescriptor) -> Self {
        match (book.testament(), book.genre()) {
            (_, Genre::Wisdom) => Self::Poetic,
            (Testament::Old, Genre::Prophecy) => Self::Prophetic,
            (Testament::Old, _) => Self::OldTestament,
            (Testament::New, _) => Self::NewTestament,
        }
    }

    /// The fixed phrase list for this category.
    #[must_use]
    pub const fn phrases(self) -> &'static [&'static str] {
        match self {
            Self::Poetic => POETIC,
            Self::Prophetic => PROPHETIC,
            Self::OldTestament => OLD_TESTAMENT,
            Self::NewTestament => NEW_TESTAMENT,
        }
    }

    /// Clause appended to every phrase of this category.
    #[must_use]
    pub const fn closing(self) -> &'static str {
        match self {
            Self::Poetic => "and the upright shall rejoice.",
            Self::Prophetic => "declares the Lord.",
            Self::OldTestament => "and it was so in those days.",
            Self::NewTestament => "and grace was upon them all.",
        }
    }
}

/// Picks the phrase for a verse number.
///
/// Deterministic by construction: verse `n` maps to entry `(n - 1) mod len`,
/// so verse 1 takes the first phrase and consecutive verses differ.
#[must_use]
pub fn select_phrase(category: PhraseCategory, verse: u32) -> &'static str {
    let phrases = category.phrases();
    let index = usize::try_from(verse.saturating_sub(1)).unwrap_or(0) % phrases.len();
    phrases[index]
}
