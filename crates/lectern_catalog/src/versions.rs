//! Translation versions.
//!
//! A [`Version`] names one rendering of the text and records which language
//! track resolves it and what each provider calls it. Lookup by code is
//! case-insensitive; unknown codes fall back to a default version instead of
//! failing.

use im::HashMap as ImHashMap;
use lectern_foundation::{Error, LanguageTrack, ProviderId, Result};

/// One translation of the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Version {
    code: String,
    label: String,
    track: LanguageTrack,
    translation_ids: ImHashMap<ProviderId, String>,
}

impl Version {
    /// Creates a version with no provider translation ids.
    #[must_use]
    pub fn new(code: impl Into<String>, label: impl Into<String>, track: LanguageTrack) -> Self {
        Self {
            code: code.into().to_ascii_uppercase(),
            label: label.into(),
            track,
            translation_ids: ImHashMap::new(),
        }
    }

    /// Sets the id a provider uses for this translation.
    #[must_use]
    pub fn with_translation_id(mut self, provider: ProviderId, id: impl Into<String>) -> Self {
        self.translation_ids.insert(provider, id.into());
        self
    }

    /// Upper-case version code, e.g. `KJV`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable translation label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The language track this version is resolved through.
    #[must_use]
    pub const fn track(&self) -> LanguageTrack {
        self.track
    }

    /// The id a provider uses for this translation, if it carries it.
    #[must_use]
    pub fn translation_id(&self, provider: ProviderId) -> Option<&str> {
        self.translation_ids.get(&provider).map(String::as_str)
    }
}

/// The set of known versions.
#[derive(Clone, Debug)]
pub struct VersionRegistry {
    versions: Vec<Version>,
}

impl VersionRegistry {
    /// Creates a registry, rejecting duplicate codes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if the list is empty or two versions share a code.
    pub fn new(versions: Vec<Version>) -> Result<Self> {
        if versions.is_empty() {
            return Err(Error::invalid_catalog("version registry is empty"));
        }
        for (i, version) in versions.iter().enumerate() {
            if versions[..i].iter().any(|other| other.code == version.code) {
                return Err(Error::invalid_catalog(format!(
                    "duplicate version code: {}",
                    version.code
                )));
            }
        }
        Ok(Self { versions })
    }

    /// The standard registry.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            versions: standard_versions(),
        }
    }

    /// Finds a version by code, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Version> {
        let code = code.trim();
        self.versions
            .iter()
            .find(|v| v.code.eq_ignore_ascii_case(code))
    }

    /// Resolves a requested code, falling back to `default_code`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if the default code itself is not registered.
    pub fn resolve(&self, requested: Option<&str>, default_code: &str) -> Result<&Version> {
        if let Some(version) = requested.and_then(|code| self.get(code)) {
            return Ok(version);
        }
        self.get(default_code).ok_or_else(|| {
            Error::invalid_catalog(format!("default version {default_code} is not registered"))
        })
    }

    /// Iterates versions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Version> {
        self.versions.iter()
    }
}

impl Default for VersionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_versions() -> Vec<Version> {
    use LanguageTrack::{Source, Translated};
    use ProviderId::{KeyedApi, PublicEndpoint, Scrape};

    vec![
        Version::new("KJV", "King James Version", Source)
            .with_translation_id(PublicEndpoint, "kjv")
            .with_translation_id(Scrape, "KJV"),
        Version::new("WEB", "World English Bible", Source)
            .with_translation_id(PublicEndpoint, "web")
            .with_translation_id(Scrape, "WEB"),
        Version::new("BBE", "Bible in Basic English", Source)
            .with_translation_id(PublicEndpoint, "bbe"),
        Version::new("OEB", "Open English Bible (US)", Source)
            .with_translation_id(PublicEndpoint, "oeb-us"),
        Version::new("ALMEIDA", "João Ferreira de Almeida", Translated)
            .with_translation_id(KeyedApi, "por-almeida")
            .with_translation_id(PublicEndpoint, "almeida")
            .with_translation_id(Scrape, "ARC"),
        Version::new("RCCV", "Romanian Corrected Cornilescu Version", Translated)
            .with_translation_id(KeyedApi, "ron-rccv")
            .with_translation_id(PublicEndpoint, "rccv")
            .with_translation_id(Scrape, "RMNN"),
        Version::new("CLEMENTINE", "Clementine Latin Vulgate", Translated)
            .with_translation_id(KeyedApi, "lat-clementine")
            .with_translation_id(PublicEndpoint, "clementine")
            .with_translation_id(Scrape, "VULGATE"),
    ]
}
