//! Parsing of human-written references.
//!
//! Accepted shapes: `John 3`, `John 3:16`, `John 3:16-18`, `1 Cor 13:4-7`,
//! `Song of Solomon 2.1`. The book part is passed through untouched; the
//! engine decides whether it names a known book.

use std::fmt;

use lectern_engine::{ChapterQuery, PassageQuery};
use lectern_foundation::{Error, Result};
use regex::Regex;

/// A parsed reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reference {
    /// A whole chapter.
    Chapter(ChapterQuery),
    /// A verse or verse range.
    Passage(PassageQuery),
}

impl Reference {
    /// Applies a version code to the query.
    #[must_use]
    pub fn with_version(self, version: Option<&str>) -> Self {
        match (self, version) {
            (Self::Chapter(q), Some(code)) => Self::Chapter(q.with_version(code)),
            (Self::Passage(q), Some(code)) => Self::Passage(q.with_version(code)),
            (reference, None) => reference,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chapter(q) => write!(f, "{} {}", q.book, q.chapter),
            Self::Passage(q) => match &q.end_verse {
                Some(end) if *end != q.verse => write!(f, "{} {}:{}-{}", q.book, q.chapter, q.verse, end),
                _ => write!(f, "{} {}:{}", q.book, q.chapter, q.verse),
            },
        }
    }
}

/// Parses references into engine queries.
#[derive(Clone, Debug)]
pub struct ReferenceParser {
    pattern: Regex,
}

impl ReferenceParser {
    /// Creates a parser.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the reference pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(
            r"^(?P<book>.*?\S)\s*(?P<chapter>\d+)(?:\s*[:.]\s*(?P<verse>\d+)(?:\s*[-\u{2013}]\s*(?P<end>\d+))?)?$",
        )
        .map_err(|e| Error::internal(format!("reference pattern: {e}")))?;
        Ok(Self { pattern })
    }

    /// Parses one reference.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the input is not `Book Chapter[:Verse[-End]]`.
    pub fn parse(&self, input: &str) -> Result<Reference> {
        let input = input.trim();
        let malformed = || {
            Error::invalid_request(
                "reference",
                format!("expected `Book Chapter[:Verse[-End]]`, got {input:?}"),
            )
        };
        let caps = self.pattern.captures(input).ok_or_else(malformed)?;

        let book = caps.name("book").map_or("", |m| m.as_str()).trim();
        if !book.chars().any(char::is_alphabetic) {
            return Err(malformed());
        }
        let chapter = caps.name("chapter").map_or("", |m| m.as_str());
        let reference = match caps.name("verse") {
            None => Reference::Chapter(ChapterQuery::new(book, chapter)),
            Some(verse) => {
                let mut query = PassageQuery::new(book, chapter, verse.as_str());
                if let Some(end) = caps.name("end") {
                    query = query.with_end_verse(end.as_str());
                }
                Reference::Passage(query)
            }
        };
        Ok(reference)
    }
}
