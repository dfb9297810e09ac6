//! The resolution façade.

use std::sync::Arc;

use lectern_catalog::{Catalog, VersionRegistry};
use lectern_foundation::{LanguageTrack, Result};
use lectern_providers::build_client;
use tokio_util::sync::CancellationToken;

use crate::chain::ProviderChain;
use crate::config::EngineConfig;
use crate::orchestrator::{Orchestrator, ResolutionReport};
use crate::request::{ChapterQuery, PassageQuery, RequestNormalizer, ResolutionRequest};
use crate::response::{ChapterResponse, PassageResponse};

/// Resolves chapter and passage queries.
///
/// Holds only immutable state, so one resolver serves any number of
/// concurrent requests.
#[derive(Clone, Debug)]
pub struct Resolver {
    normalizer: RequestNormalizer,
    orchestrator: Orchestrator,
}

impl Resolver {
    /// Creates a resolver over the standard catalog, versions and chains.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the default version is unknown,
    /// `InvalidCatalog` if the standard tables fail validation, or an
    /// internal error if the HTTP client cannot be built.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let catalog = Catalog::standard()?;
        let versions = Arc::new(VersionRegistry::standard());
        let normalizer = RequestNormalizer::new(catalog, versions, &config.default_version)?;

        let client = build_client(&config.transport)?;
        let source = ProviderChain::standard_with_client(LanguageTrack::Source, &config, &client);
        let translated = ProviderChain::standard_with_client(LanguageTrack::Translated, &config, &client);
        tracing::debug!(?config, "resolver ready");

        Ok(Self {
            normalizer,
            orchestrator: Orchestrator::new(Arc::new(config), source, translated),
        })
    }

    /// Replaces the provider chain of one track.
    #[must_use]
    pub fn with_chain(mut self, chain: ProviderChain) -> Self {
        self.orchestrator = self.orchestrator.with_chain(chain);
        self
    }

    /// Replaces the book catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.normalizer = self.normalizer.with_catalog(catalog);
        self
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        self.orchestrator.config()
    }

    /// The book catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.normalizer.catalog()
    }

    /// The registered versions.
    #[must_use]
    pub fn versions(&self) -> &VersionRegistry {
        self.normalizer.versions()
    }

    /// The provider chain of `track`.
    #[must_use]
    pub fn chain(&self, track: LanguageTrack) -> &ProviderChain {
        self.orchestrator.chain(track)
    }

    /// Resolves a whole chapter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for malformed input. Provider failures never
    /// surface; the chapter is synthesized instead.
    pub async fn resolve_chapter(&self, query: &ChapterQuery) -> Result<ChapterResponse> {
        self.resolve_chapter_with_cancel(query, &CancellationToken::new()).await
    }

    /// Resolves a whole chapter, stopping early if `cancel` fires.
    ///
    /// # Errors
    ///
    /// As [`Resolver::resolve_chapter`], plus `Cancelled`.
    pub async fn resolve_chapter_with_cancel(
        &self,
        query: &ChapterQuery,
        cancel: &CancellationToken,
    ) -> Result<ChapterResponse> {
        let request = self.normalizer.normalize_chapter(query)?;
        let report = self.resolve(&request, cancel).await?;
        Ok(ChapterResponse::assemble(&request, report))
    }

    /// Resolves a verse or verse range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for malformed input and `VerseNotFound` when
    /// no verse of the resolved chapter lies in the range.
    pub async fn resolve_passage(&self, query: &PassageQuery) -> Result<PassageResponse> {
        self.resolve_passage_with_cancel(query, &CancellationToken::new()).await
    }

    /// Resolves a verse or verse range, stopping early if `cancel` fires.
    ///
    /// # Errors
    ///
    /// As [`Resolver::resolve_passage`], plus `Cancelled`.
    pub async fn resolve_passage_with_cancel(
        &self,
        query: &PassageQuery,
        cancel: &CancellationToken,
    ) -> Result<PassageResponse> {
        let request = self.normalizer.normalize_passage(query)?;
        let report = self.resolve(&request, cancel).await?;
        PassageResponse::assemble(&request, report)
    }

    /// Runs the orchestrator for an already normalized request.
    ///
    /// # Errors
    ///
    /// Returns `Cancelled` or `SynthesisFailure`.
    pub async fn resolve(&self, request: &ResolutionRequest, cancel: &CancellationToken) -> Result<ResolutionReport> {
        let report = self.orchestrator.resolve(request, cancel).await?;
        tracing::trace!(
            book = %request.book().localized_name(),
            chapter = request.chapter(),
            provider = ?report.provider,
            synthesized = report.synthesized,
            verses = report.verses.len(),
            "chapter resolved"
        );
        Ok(report)
    }

    /// The normalizer, for hosts that build requests themselves.
    #[must_use]
    pub fn normalizer(&self) -> &RequestNormalizer {
        &self.normalizer
    }
}
