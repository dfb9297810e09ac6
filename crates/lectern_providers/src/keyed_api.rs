//! The credentialed JSON API.
//!
//! Requires an API key sent in the `api-key` header. Without one the adapter
//! reports an empty outcome and never touches the network.

use async_trait::async_trait;
use lectern_foundation::{ProviderId, Verse};
use serde::Deserialize;

use crate::provider::{ChapterRequest, Provider, ProviderOutcome, provider_codes};
use crate::transport::{TransportConfig, TransportErrorExt, join_url};

const API_KEY_HEADER: &str = "api-key";

#[derive(Debug, Deserialize)]
struct Envelope {
    data: ChapterData,
}

#[derive(Debug, Deserialize)]
struct ChapterData {
    #[serde(default)]
    verses: Vec<VerseEntry>,
}

#[derive(Debug, Deserialize)]
struct VerseEntry {
    #[serde(default)]
    reference: String,
    #[serde(default)]
    text: String,
}

/// Extracts the verse number from a reference like `John.3:16`.
fn verse_number(reference: &str) -> Option<u32> {
    let (_, tail) = reference.rsplit_once(':')?;
    tail.trim().parse().ok()
}

/// Adapter for the keyed API.
#[derive(Clone)]
pub struct KeyedApiAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for KeyedApiAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedApiAdapter")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl KeyedApiAdapter {
    /// Creates the adapter. A blank key counts as no key.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &TransportConfig, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: config.keyed_api_url.clone(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    /// Returns true if a credential is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn verses_url(&self, translation: &str, book_code: &str, chapter: u32) -> String {
        join_url(
            &self.base_url,
            &format!("v1/bibles/{translation}/chapters/{book_code}.{chapter}/verses"),
        )
    }
}

#[async_trait]
impl Provider for KeyedApiAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::KeyedApi
    }

    async fn fetch_chapter(&self, request: &ChapterRequest<'_>) -> ProviderOutcome {
        let id = self.id();
        let Some(api_key) = self.api_key.as_deref() else {
            return ProviderOutcome::empty(id, "no API key configured");
        };
        let (book_code, translation) = match provider_codes(id, request) {
            Ok(codes) => codes,
            Err(outcome) => return outcome,
        };
        let url = self.verses_url(translation, book_code, request.chapter);
        tracing::trace!(provider = %id, %url, "fetching chapter");

        let response = match self
            .client
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
        {
            Ok(response) => response,
            Err(e) => return ProviderOutcome::failed(id, &e.into_provider_error(id)),
        };
        let envelope: Envelope = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => return ProviderOutcome::failed(id, &e.into_provider_error(id)),
        };

        let book = request.book.localized_name();
        let code = request.version.code();
        let verses = envelope
            .data
            .verses
            .into_iter()
            .zip(1u32..)
            .map(|(entry, position)| {
                let number = verse_number(&entry.reference).unwrap_or(position);
                Verse::new(book, request.chapter, number, entry.text, code)
            })
            .collect();
        ProviderOutcome::success(id, verses)
    }
}
