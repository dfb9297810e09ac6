//! Response assembly.

use std::fmt;

use lectern_foundation::{Error, ErrorContext, Result, Verse};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::orchestrator::ResolutionReport;
use crate::request::ResolutionRequest;

/// A resolved chapter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChapterResponse {
    /// Localized book name.
    pub book: String,
    /// Chapter number.
    pub chapter: u32,
    /// Resolved version code.
    pub version: String,
    /// Human-readable version name.
    pub translation_label: String,
    /// The chapter's verses, numbered 1..=n.
    pub verses: Vec<Verse>,
}

impl ChapterResponse {
    pub(crate) fn assemble(request: &ResolutionRequest, report: ResolutionReport) -> Self {
        Self {
            book: request.book().localized_name().to_string(),
            chapter: request.chapter(),
            version: request.version().code().to_string(),
            translation_label: request.version().label().to_string(),
            verses: report.verses,
        }
    }
}

impl fmt::Display for ChapterResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} ({})", self.book, self.chapter, self.translation_label)?;
        for verse in &self.verses {
            writeln!(f, "{verse}")?;
        }
        Ok(())
    }
}

/// A resolved verse or verse range.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PassageResponse {
    /// Human-readable reference, e.g. `John 3:16-18`.
    pub reference: String,
    /// Verses in range, ascending.
    pub verses: Vec<Verse>,
    /// Human-readable version name.
    pub translation_label: String,
}

impl PassageResponse {
    /// Filters a resolved chapter down to the requested range.
    pub(crate) fn assemble(request: &ResolutionRequest, report: ResolutionReport) -> Result<Self> {
        let book = request.book().localized_name();
        let Some(start) = request.verse() else {
            return Err(Error::internal("passage assembly needs a verse"));
        };
        let end = request.end_verse().unwrap_or(start).max(start);
        let reference = format_reference(book, request.chapter(), start, end);

        let verses: Vec<Verse> = report
            .verses
            .into_iter()
            .filter(|v| (start..=end).contains(&v.verse))
            .collect();
        if verses.is_empty() {
            return Err(Error::verse_not_found(reference).with_context(
                ErrorContext::new()
                    .with_book(book)
                    .with_chapter(request.chapter()),
            ));
        }

        Ok(Self {
            reference,
            verses,
            translation_label: request.version().label().to_string(),
        })
    }
}

impl fmt::Display for PassageResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.reference, self.translation_label)?;
        for verse in &self.verses {
            writeln!(f, "{verse}")?;
        }
        Ok(())
    }
}

/// Formats `Book Chapter:Verse` or `Book Chapter:Verse-EndVerse`.
#[must_use]
pub fn format_reference(book: &str, chapter: u32, verse: u32, end_verse: u32) -> String {
    if end_verse > verse {
        format!("{book} {chapter}:{verse}-{end_verse}")
    } else {
        format!("{book} {chapter}:{verse}")
    }
}
