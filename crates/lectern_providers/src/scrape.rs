//! HTML passage pages.
//!
//! Used only on the translated track. Any failure, including a page with no
//! recognizable verse spans, is an empty outcome; synthesis is left to the
//! engine.

use async_trait::async_trait;
use lectern_foundation::ProviderId;

use crate::html::parse_verses;
use crate::provider::{ChapterRequest, Provider, ProviderOutcome, provider_codes};
use crate::transport::{TransportConfig, TransportErrorExt, join_url};

/// Adapter for the scraped passage pages.
#[derive(Clone, Debug)]
pub struct ScrapeAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl ScrapeAdapter {
    /// Creates the adapter over a shared client.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &TransportConfig) -> Self {
        Self {
            client,
            base_url: config.scrape_url.clone(),
        }
    }
}

#[async_trait]
impl Provider for ScrapeAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Scrape
    }

    async fn fetch_chapter(&self, request: &ChapterRequest<'_>) -> ProviderOutcome {
        let id = self.id();
        let (book_name, translation) = match provider_codes(id, request) {
            Ok(codes) => codes,
            Err(outcome) => return outcome,
        };
        let url = join_url(&self.base_url, "passage/");
        let search = format!("{book_name} {}", request.chapter);
        tracing::trace!(provider = %id, %url, %search, version = translation, "fetching page");

        let response = match self
            .client
            .get(&url)
            .query(&[("search", search.as_str()), ("version", translation)])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
        {
            Ok(response) => response,
            Err(e) => return ProviderOutcome::failed(id, &e.into_provider_error(id)),
        };
        let markup = match response.text().await {
            Ok(markup) => markup,
            Err(e) => return ProviderOutcome::failed(id, &e.into_provider_error(id)),
        };

        let verses = parse_verses(&markup, request.book.localized_name(), request.chapter, translation);
        if verses.is_empty() {
            return ProviderOutcome::empty(id, "no verse spans in page");
        }
        ProviderOutcome::success(id, verses)
    }
}
