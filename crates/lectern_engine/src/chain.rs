//! Ordered provider tiers per language track.

use std::fmt;
use std::sync::Arc;

use lectern_foundation::{LanguageTrack, ProviderId, Result};
use lectern_providers::{KeyedApiAdapter, Provider, PublicEndpointAdapter, ScrapeAdapter, build_client};

use crate::config::EngineConfig;

/// The providers of one language track, in priority order.
#[derive(Clone)]
pub struct ProviderChain {
    track: LanguageTrack,
    tiers: Vec<Arc<dyn Provider>>,
}

impl ProviderChain {
    /// Creates a chain from explicit tiers.
    #[must_use]
    pub fn new(track: LanguageTrack, tiers: Vec<Arc<dyn Provider>>) -> Self {
        Self { track, tiers }
    }

    /// Creates a chain with no tiers; every request goes to synthesis.
    #[must_use]
    pub fn empty(track: LanguageTrack) -> Self {
        Self::new(track, Vec::new())
    }

    /// The standard tiers for `track`, with a client of their own.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the HTTP client cannot be built.
    pub fn standard(track: LanguageTrack, config: &EngineConfig) -> Result<Self> {
        let client = build_client(&config.transport)?;
        Ok(Self::standard_with_client(track, config, &client))
    }

    /// The standard tiers for `track` over a shared client.
    ///
    /// - source: public endpoint only
    /// - translated: keyed API, public endpoint, scrape
    #[must_use]
    pub fn standard_with_client(track: LanguageTrack, config: &EngineConfig, client: &reqwest::Client) -> Self {
        let public: Arc<dyn Provider> = Arc::new(PublicEndpointAdapter::new(client.clone(), &config.transport));
        let tiers = match track {
            LanguageTrack::Source => vec![public],
            LanguageTrack::Translated => vec![
                Arc::new(KeyedApiAdapter::new(
                    client.clone(),
                    &config.transport,
                    config.keyed_api_key.clone(),
                )) as Arc<dyn Provider>,
                public,
                Arc::new(ScrapeAdapter::new(client.clone(), &config.transport)),
            ],
        };
        Self::new(track, tiers)
    }

    /// The track this chain serves.
    #[must_use]
    pub const fn track(&self) -> LanguageTrack {
        self.track
    }

    /// The tiers in priority order.
    #[must_use]
    pub fn tiers(&self) -> &[Arc<dyn Provider>] {
        &self.tiers
    }

    /// Provider ids in priority order.
    #[must_use]
    pub fn ids(&self) -> Vec<ProviderId> {
        self.tiers.iter().map(|tier| tier.id()).collect()
    }

    /// Number of tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Returns true if the chain has no tiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderChain")
            .field("track", &self.track)
            .field("tiers", &self.ids())
            .finish()
    }
}
