//! The free JSON endpoint addressed by short book codes.
//!
//! `GET {base}/data/{translation}/{BOOK}/{chapter}` returns
//! `{"verses": [{"verse": 1, "text": "..."}]}`. Entries without a verse
//! number are numbered by position.

use async_trait::async_trait;
use lectern_foundation::{ProviderId, Verse};
use serde::Deserialize;

use crate::provider::{ChapterRequest, Provider, ProviderOutcome, provider_codes};
use crate::transport::{TransportConfig, TransportErrorExt, join_url};

#[derive(Debug, Deserialize)]
struct ChapterPayload {
    #[serde(default)]
    verses: Vec<VersePayload>,
}

#[derive(Debug, Deserialize)]
struct VersePayload {
    #[serde(default)]
    verse: Option<u32>,
    #[serde(default)]
    text: String,
}

/// Adapter for the public endpoint.
#[derive(Clone, Debug)]
pub struct PublicEndpointAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl PublicEndpointAdapter {
    /// Creates the adapter over a shared client.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &TransportConfig) -> Self {
        Self {
            client,
            base_url: config.public_endpoint_url.clone(),
        }
    }

    fn chapter_url(&self, translation: &str, book_code: &str, chapter: u32) -> String {
        join_url(
            &self.base_url,
            &format!("data/{translation}/{}/{chapter}", book_code.to_uppercase()),
        )
    }
}

#[async_trait]
impl Provider for PublicEndpointAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::PublicEndpoint
    }

    async fn fetch_chapter(&self, request: &ChapterRequest<'_>) -> ProviderOutcome {
        let id = self.id();
        let (book_code, translation) = match provider_codes(id, request) {
            Ok(codes) => codes,
            Err(outcome) => return outcome,
        };
        let url = self.chapter_url(translation, book_code, request.chapter);
        tracing::trace!(provider = %id, %url, "fetching chapter");

        let response = match self.client.get(&url).send().await.and_then(reqwest::Response::error_for_status) {
            Ok(response) => response,
            Err(e) => return ProviderOutcome::failed(id, &e.into_provider_error(id)),
        };
        let payload: ChapterPayload = match response.json().await {
            Ok(payload) => payload,
            Err(e) => return ProviderOutcome::failed(id, &e.into_provider_error(id)),
        };

        let book = request.book.localized_name();
        let code = request.version.code();
        let verses = payload
            .verses
            .into_iter()
            .zip(1u32..)
            .map(|(entry, position)| {
                Verse::new(book, request.chapter, entry.verse.unwrap_or(position), entry.text, code)
            })
            .collect();
        ProviderOutcome::success(id, verses)
    }
}
