//! The provider contract.

use std::fmt;

use async_trait::async_trait;
use lectern_catalog::{BookDescriptor, Version};
use lectern_foundation::{Error, ProviderId, VerseList};

/// What a provider is asked for: one chapter of one book in one version.
#[derive(Clone, Copy, Debug)]
pub struct ChapterRequest<'a> {
    /// The book, listed or unlisted.
    pub book: &'a BookDescriptor,
    /// Chapter number, already validated positive.
    pub chapter: u32,
    /// The resolved version.
    pub version: &'a Version,
}

impl<'a> ChapterRequest<'a> {
    /// Creates a request.
    #[must_use]
    pub const fn new(book: &'a BookDescriptor, chapter: u32, version: &'a Version) -> Self {
        Self {
            book,
            chapter,
            version,
        }
    }
}

/// Result of one provider invocation. Ephemeral; never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderOutcome {
    /// The provider that produced this outcome.
    pub provider: ProviderId,
    /// Verses returned; empty when the provider had nothing usable.
    pub verses: VerseList,
    /// Why the outcome is empty, for logging.
    pub failure_reason: Option<String>,
}

impl ProviderOutcome {
    /// A populated outcome.
    ///
    /// An empty list is recorded as an empty outcome.
    #[must_use]
    pub fn success(provider: ProviderId, verses: VerseList) -> Self {
        if verses.is_empty() {
            return Self::empty(provider, "no verses in response");
        }
        Self {
            provider,
            verses,
            failure_reason: None,
        }
    }

    /// An empty outcome with a reason.
    #[must_use]
    pub fn empty(provider: ProviderId, reason: impl Into<String>) -> Self {
        Self {
            provider,
            verses: Vec::new(),
            failure_reason: Some(reason.into()),
        }
    }

    /// An empty outcome recording a failure.
    #[must_use]
    pub fn failed(provider: ProviderId, error: &Error) -> Self {
        Self::empty(provider, error.to_string())
    }

    /// True when the provider returned at least one verse.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        !self.verses.is_empty()
    }
}

/// One external content source.
///
/// Implementations must absorb their own failures: transport errors, bad
/// status codes and malformed bodies all become an empty outcome.
#[async_trait]
pub trait Provider: Send + Sync + fmt::Debug {
    /// Which provider this is.
    fn id(&self) -> ProviderId;

    /// Fetches one chapter.
    async fn fetch_chapter(&self, request: &ChapterRequest<'_>) -> ProviderOutcome;
}

/// Looks up the book code and translation id a provider needs.
///
/// Returns the empty outcome to report when either is missing.
pub(crate) fn provider_codes<'r>(
    provider: ProviderId,
    request: &ChapterRequest<'r>,
) -> Result<(&'r str, &'r str), ProviderOutcome> {
    let Some(book_code) = request.book.provider_code(provider) else {
        return Err(ProviderOutcome::empty(
            provider,
            format!("no {provider} code for {}", request.book.localized_name()),
        ));
    };
    let Some(translation) = request.version.translation_id(provider) else {
        return Err(ProviderOutcome::empty(
            provider,
            format!("{} is not carried by {provider}", request.version.code()),
        ));
    };
    Ok((book_code, translation))
}
