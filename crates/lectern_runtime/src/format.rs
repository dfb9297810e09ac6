//! Rendering of resolved content.

use std::fmt;
use std::str::FromStr;

use lectern_engine::{ChapterResponse, PassageResponse};
use lectern_foundation::{Error, Result};

/// How resolved content is printed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Heading line followed by `N text` lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::invalid_request("format", format!("expected text or json, got {other:?}"))),
        }
    }
}

/// Either kind of response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A whole chapter.
    Chapter(ChapterResponse),
    /// A verse or range.
    Passage(PassageResponse),
}

impl Resolved {
    /// Number of verses.
    #[must_use]
    pub fn verse_count(&self) -> usize {
        match self {
            Self::Chapter(c) => c.verses.len(),
            Self::Passage(p) => p.verses.len(),
        }
    }

    /// Renders in `format`.
    ///
    /// # Errors
    ///
    /// Returns an internal error if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => {
                let json = match self {
                    Self::Chapter(c) => serde_json::to_string_pretty(c),
                    Self::Passage(p) => serde_json::to_string_pretty(p),
                };
                json.map_err(|e| Error::internal(format!("JSON encoding failed: {e}")))
            }
        }
    }
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chapter(c) => fmt::Display::fmt(c, f),
            Self::Passage(p) => fmt::Display::fmt(p, f),
        }
    }
}
