//! Inbound queries and their normalization into resolution requests.
//!
//! Queries carry parameters as they arrive from a host (strings, possibly
//! malformed). The [`RequestNormalizer`] validates and coerces them:
//!
//! - the book must be non-empty after trimming; unknown books are accepted
//!   and resolve to an unlisted descriptor
//! - chapter and verse must be integers greater than zero; integral floats
//!   such as `"3.0"` are accepted
//! - a missing or malformed end verse defaults to the verse, and an end
//!   verse below the verse is clamped up to it
//! - unknown version codes fall back to the configured default

use std::sync::Arc;

use lectern_catalog::{BookDescriptor, Catalog, Version, VersionRegistry};
use lectern_foundation::{Error, LanguageTrack, Result};

/// A request for a whole chapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterQuery {
    /// Raw book name.
    pub book: String,
    /// Raw chapter number.
    pub chapter: String,
    /// Requested version code.
    pub version: Option<String>,
}

impl ChapterQuery {
    /// Creates a query. Numbers may be passed as any displayable value.
    #[must_use]
    pub fn new(book: impl Into<String>, chapter: impl ToString) -> Self {
        Self {
            book: book.into(),
            chapter: chapter.to_string(),
            version: None,
        }
    }

    /// Builder method to request a version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// A request for one verse or a verse range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassageQuery {
    /// Raw book name.
    pub book: String,
    /// Raw chapter number.
    pub chapter: String,
    /// Raw first verse.
    pub verse: String,
    /// Raw last verse; defaults to `verse`.
    pub end_verse: Option<String>,
    /// Requested version code.
    pub version: Option<String>,
}

impl PassageQuery {
    /// Creates a single-verse query.
    #[must_use]
    pub fn new(book: impl Into<String>, chapter: impl ToString, verse: impl ToString) -> Self {
        Self {
            book: book.into(),
            chapter: chapter.to_string(),
            verse: verse.to_string(),
            end_verse: None,
            version: None,
        }
    }

    /// Builder method to extend the query to a range.
    #[must_use]
    pub fn with_end_verse(mut self, end_verse: impl ToString) -> Self {
        self.end_verse = Some(end_verse.to_string());
        self
    }

    /// Builder method to request a version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// The chapter query covering this passage.
    #[must_use]
    pub fn chapter_query(&self) -> ChapterQuery {
        ChapterQuery {
            book: self.book.clone(),
            chapter: self.chapter.clone(),
            version: self.version.clone(),
        }
    }
}

/// A validated request. Immutable once built.
#[derive(Clone, Debug)]
pub struct ResolutionRequest {
    book: Arc<BookDescriptor>,
    chapter: u32,
    verse: Option<u32>,
    end_verse: Option<u32>,
    version: Version,
}

impl ResolutionRequest {
    /// The resolved book, listed or unlisted.
    #[must_use]
    pub fn book(&self) -> &BookDescriptor {
        &self.book
    }

    /// The chapter number.
    #[must_use]
    pub const fn chapter(&self) -> u32 {
        self.chapter
    }

    /// The first requested verse, for passage requests.
    #[must_use]
    pub const fn verse(&self) -> Option<u32> {
        self.verse
    }

    /// The last requested verse, for passage requests.
    #[must_use]
    pub const fn end_verse(&self) -> Option<u32> {
        self.end_verse
    }

    /// The resolved version.
    #[must_use]
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// The orchestration path, taken from the version.
    #[must_use]
    pub fn language_track(&self) -> LanguageTrack {
        self.version.track()
    }
}

/// Validates queries against a catalog and version registry.
#[derive(Clone, Debug)]
pub struct RequestNormalizer {
    catalog: Arc<Catalog>,
    versions: Arc<VersionRegistry>,
    default_version: String,
}

impl RequestNormalizer {
    /// Creates a normalizer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if `default_version` is not registered.
    pub fn new(catalog: Arc<Catalog>, versions: Arc<VersionRegistry>, default_version: &str) -> Result<Self> {
        let Some(version) = versions.get(default_version) else {
            return Err(Error::invalid_request(
                "default_version",
                format!("{default_version} is not a known version"),
            ));
        };
        let default_version = version.code().to_string();
        Ok(Self {
            catalog,
            versions,
            default_version,
        })
    }

    /// Resolves books against `catalog` instead.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// The catalog books are resolved against.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The registered versions.
    #[must_use]
    pub fn versions(&self) -> &Arc<VersionRegistry> {
        &self.versions
    }

    /// The code used when a requested version is unknown.
    #[must_use]
    pub fn default_version(&self) -> &str {
        &self.default_version
    }

    /// Normalizes a chapter query.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for an empty book or a malformed chapter.
    pub fn normalize_chapter(&self, query: &ChapterQuery) -> Result<ResolutionRequest> {
        let book = self.book(&query.book)?;
        let chapter = positive_integer("chapter", &query.chapter)?;
        let version = self.version(query.version.as_deref())?;
        Ok(ResolutionRequest {
            book,
            chapter,
            verse: None,
            end_verse: None,
            version,
        })
    }

    /// Normalizes a passage query.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for an empty book or a malformed chapter or
    /// verse. A malformed end verse is not an error.
    pub fn normalize_passage(&self, query: &PassageQuery) -> Result<ResolutionRequest> {
        let book = self.book(&query.book)?;
        let chapter = positive_integer("chapter", &query.chapter)?;
        let verse = positive_integer("verse", &query.verse)?;
        let end_verse = query
            .end_verse
            .as_deref()
            .and_then(|raw| coerce_integer(raw).ok())
            .and_then(|end| u32::try_from(end).ok())
            .map_or(verse, |end| end.max(verse));
        let version = self.version(query.version.as_deref())?;
        Ok(ResolutionRequest {
            book,
            chapter,
            verse: Some(verse),
            end_verse: Some(end_verse),
            version,
        })
    }

    fn book(&self, raw: &str) -> Result<Arc<BookDescriptor>> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(Error::invalid_request("book", "is required"));
        }
        Ok(self.catalog.resolve(name))
    }

    fn version(&self, requested: Option<&str>) -> Result<Version> {
        self.versions
            .resolve(requested, &self.default_version)
            .cloned()
    }
}

/// Parses an integer, accepting integral floats like `"3.0"`.
fn coerce_integer(raw: &str) -> std::result::Result<i64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("is required");
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(n);
    }
    let float: f64 = raw.parse().map_err(|_| "must be an integer")?;
    if !float.is_finite() {
        return Err("must be finite");
    }
    if float.fract() != 0.0 || float.abs() > 9.0e15 {
        return Err("must be an integer");
    }
    #[allow(clippy::cast_possible_truncation)]
    Ok(float as i64)
}

fn positive_integer(field: &'static str, raw: &str) -> Result<u32> {
    let n = coerce_integer(raw).map_err(|message| Error::invalid_request(field, message))?;
    if n <= 0 {
        return Err(Error::invalid_request(field, format!("must be greater than zero, got {n}")));
    }
    u32::try_from(n).map_err(|_| Error::invalid_request(field, format!("{n} is out of range")))
}
