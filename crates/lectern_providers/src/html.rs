//! Extraction of verse text from passage page markup.
//!
//! Verse bodies are `<span>` elements whose class list contains `text`.
//! Inline footnote and verse-number markers (`<sup>`) are removed, remaining
//! tags are stripped, entities decoded by an HTML5 parser and whitespace
//! collapsed. Matches that come out blank do not consume a verse number.

use std::sync::LazyLock;

use lectern_foundation::{Verse, VerseList};
use regex::Regex;
use scraper::Html;

static VERSE_SPAN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"(?is)<span\b[^>]*\bclass\s*=\s*"(?:[^"]*\s)?text(?:\s[^"]*)?"[^>]*>(.*?)</span>"#).ok()
});

static SUPERSCRIPT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?is)<sup\b[^>]*>.*?</sup>").ok());

static TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").ok());

/// Parses every verse span in `markup` into a verse of `book`/`chapter`.
///
/// Verses are numbered in document order starting at 1. Returns an empty
/// list when nothing usable is found; never panics on malformed input.
/// `version` is only a label here; the scrape adapter passes the translation
/// id it fetched and the engine retags accepted verses with the requested code.
#[must_use]
pub fn parse_verses(markup: &str, book: &str, chapter: u32, version: &str) -> VerseList {
    let Some(span) = VERSE_SPAN.as_ref() else {
        return Vec::new();
    };

    let mut verses = Vec::new();
    let mut number = 1u32;
    for captures in span.captures_iter(markup) {
        let Some(inner) = captures.get(1) else {
            continue;
        };
        let text = clean_text(inner.as_str());
        if text.is_empty() {
            continue;
        }
        verses.push(Verse::new(book, chapter, number, text, version));
        number += 1;
    }
    verses
}

/// Reduces an HTML fragment to plain text.
#[must_use]
pub fn clean_text(fragment: &str) -> String {
    let mut text = match SUPERSCRIPT.as_ref() {
        Some(re) => re.replace_all(fragment, " ").into_owned(),
        None => fragment.to_string(),
    };
    if let Some(re) = TAG.as_ref() {
        text = re.replace_all(&text, " ").into_owned();
    }
    let decoded = decode_entities(&text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes named and numeric character references in tag-free text.
///
/// Covers the full HTML5 entity table; unknown names are left as written.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    Html::parse_fragment(text).root_element().text().collect()
}
