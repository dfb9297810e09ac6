//! Tiered provider evaluation with deterministic fallback.
//!
//! For the request's language track the orchestrator walks the chain in
//! priority order, one provider at a time. The first tier whose normalized
//! result is a complete chapter (numbered `1..=n` by the source) wins. Empty,
//! failed or gapped tiers are logged and skipped.
//! When every tier is empty, the track is disabled, or the overall deadline
//! runs out, the chapter is synthesized. The result is never empty.

use std::sync::Arc;

use lectern_foundation::{
    Error, LanguageTrack, ProviderId, Result, VerseList, is_canonical_chapter, normalize_chapter,
};
use lectern_providers::{ChapterRequest, ProviderOutcome};
use lectern_synthesis::Synthesizer;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::chain::ProviderChain;
use crate::config::EngineConfig;
use crate::request::ResolutionRequest;

/// What happened while resolving one chapter.
#[derive(Clone, Debug)]
pub struct ResolutionReport {
    /// The chapter, normalized and non-empty.
    pub verses: VerseList,
    /// One outcome per provider invoked, in order.
    pub outcomes: Vec<ProviderOutcome>,
    /// The provider whose content was used, if any.
    pub provider: Option<ProviderId>,
    /// True if the chapter came from the synthesizer.
    pub synthesized: bool,
}

impl ResolutionReport {
    /// Number of providers that were invoked.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.outcomes.len()
    }
}

/// Runs provider chains for both tracks.
#[derive(Clone, Debug)]
pub struct Orchestrator {
    config: Arc<EngineConfig>,
    source: ProviderChain,
    translated: ProviderChain,
    synthesizer: Synthesizer,
}

impl Orchestrator {
    /// Creates an orchestrator from explicit chains.
    #[must_use]
    pub fn new(config: Arc<EngineConfig>, source: ProviderChain, translated: ProviderChain) -> Self {
        Self {
            config,
            source,
            translated,
            synthesizer: Synthesizer::new(),
        }
    }

    /// Replaces the chain of `chain.track()`.
    #[must_use]
    pub fn with_chain(mut self, chain: ProviderChain) -> Self {
        match chain.track() {
            LanguageTrack::Source => self.source = chain,
            LanguageTrack::Translated => self.translated = chain,
        }
        self
    }

    /// The chain used for `track`.
    #[must_use]
    pub fn chain(&self, track: LanguageTrack) -> &ProviderChain {
        match track {
            LanguageTrack::Source => &self.source,
            LanguageTrack::Translated => &self.translated,
        }
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves the chapter of `request`.
    ///
    /// # Errors
    ///
    /// Returns `Cancelled` if `cancel` fires while providers are running, and
    /// `SynthesisFailure` if the fallback cannot produce content.
    pub async fn resolve(&self, request: &ResolutionRequest, cancel: &CancellationToken) -> Result<ResolutionReport> {
        let track = request.language_track();
        let verbosity = self.config.log_verbosity;
        let mut outcomes = Vec::new();

        if self.config.track_enabled(track) {
            if let Some((provider, verses)) = self.run_tiers(request, cancel, &mut outcomes).await? {
                return Ok(ResolutionReport {
                    verses,
                    outcomes,
                    provider: Some(provider),
                    synthesized: false,
                });
            }
        } else if verbosity.logs_attempts() {
            tracing::debug!(%track, "external providers disabled; synthesizing");
        }

        let book = request.book();
        let verses = self
            .synthesizer
            .synthesize(book, request.chapter(), request.version().code())?;
        if verbosity.logs_failures() {
            tracing::info!(
                book = %book.localized_name(),
                chapter = request.chapter(),
                version = %request.version().code(),
                attempts = outcomes.len(),
                curated = self.synthesizer.is_curated(book, request.chapter()),
                "falling back to synthesized content"
            );
        }
        Ok(ResolutionReport {
            verses,
            outcomes,
            provider: None,
            synthesized: true,
        })
    }

    /// Walks the tiers; returns the winning provider and its normalized verses.
    async fn run_tiers(
        &self,
        request: &ResolutionRequest,
        cancel: &CancellationToken,
        outcomes: &mut Vec<ProviderOutcome>,
    ) -> Result<Option<(ProviderId, VerseList)>> {
        let verbosity = self.config.log_verbosity;
        let deadline = self.config.request_deadline.map(|budget| Instant::now() + budget);
        let book = request.book();
        let version = request.version();
        let chapter_request = ChapterRequest::new(book, request.chapter(), version);

        for tier in self.chain(request.language_track()).tiers() {
            let id = tier.id();
            if cancel.is_cancelled() {
                return Err(Error::cancelled());
            }
            if verbosity.logs_attempts() {
                tracing::debug!(provider = %id, book = %book.localized_name(), chapter = request.chapter(), "trying provider");
            }

            let fetch = tier.fetch_chapter(&chapter_request);
            let outcome = tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(Error::cancelled()),
                outcome = async {
                    match deadline {
                        Some(deadline) => tokio::time::timeout_at(deadline, fetch).await.ok(),
                        None => Some(fetch.await),
                    }
                } => outcome,
            };

            let Some(outcome) = outcome else {
                if verbosity.logs_failures() {
                    tracing::debug!(provider = %id, "overall deadline exceeded; skipping remaining tiers");
                }
                outcomes.push(ProviderOutcome::empty(id, "overall deadline exceeded"));
                return Ok(None);
            };

            let verses = normalize_chapter(
                outcome.verses.clone(),
                book.localized_name(),
                request.chapter(),
                version.code(),
            );
            if verses.is_empty() {
                if verbosity.logs_failures() {
                    tracing::debug!(
                        provider = %id,
                        reason = outcome.failure_reason.as_deref().unwrap_or("no usable verses"),
                        "provider returned nothing"
                    );
                }
                outcomes.push(outcome);
                continue;
            }
            if !is_canonical_chapter(&verses) {
                if verbosity.logs_failures() {
                    tracing::debug!(
                        provider = %id,
                        first = verses.first().map_or(0, |v| v.verse),
                        verses = verses.len(),
                        "provider verse numbering is not contiguous from 1"
                    );
                }
                outcomes.push(ProviderOutcome::empty(id, "verse numbering is not contiguous from 1"));
                continue;
            }

            if verbosity.logs_attempts() {
                tracing::debug!(provider = %id, verses = verses.len(), "provider succeeded");
            }
            outcomes.push(outcome);
            return Ok(Some((id, verses)));
        }

        Ok(None)
    }
}
