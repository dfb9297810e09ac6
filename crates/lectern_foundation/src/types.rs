//! Identifier types shared by every layer.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifies one external content source.
///
/// Catalog entries and versions carry per-provider codes keyed by this id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ProviderId {
    /// Free public JSON endpoint addressed by short book codes.
    PublicEndpoint,
    /// Credentialed JSON API addressed by `book.chapter:verse` references.
    KeyedApi,
    /// HTML passage pages parsed with the scrape parser.
    Scrape,
}

impl ProviderId {
    /// All providers, in declaration order.
    pub const ALL: [ProviderId; 3] = [Self::PublicEndpoint, Self::KeyedApi, Self::Scrape];

    /// Stable lower-case name used in logs and configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PublicEndpoint => "public-endpoint",
            Self::KeyedApi => "keyed-api",
            Self::Scrape => "scrape",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The orchestration path a version is resolved through.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LanguageTrack {
    /// Versions in the reader's own language; resolved by passthrough.
    #[default]
    Source,
    /// Versions in other languages; resolved through the multi-tier chain.
    Translated,
}

impl LanguageTrack {
    /// Stable lower-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Translated => "translated",
        }
    }
}

impl fmt::Display for LanguageTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LanguageTrack {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "source" => Ok(Self::Source),
            "translated" => Ok(Self::Translated),
            other => Err(Error::invalid_request(
                "language_track",
                format!("unknown language track: {other}"),
            )),
        }
    }
}
