//! Error types for the Lectern system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Only [`ErrorKind::InvalidRequest`], [`ErrorKind::VerseNotFound`] and the
//! server-class kinds ever reach a caller; provider failures are absorbed by
//! the orchestrator.

use std::fmt;

use thiserror::Error;

use crate::types::ProviderId;

/// Result alias used throughout Lectern.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Lectern operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid request error for the named input field.
    #[must_use]
    pub fn invalid_request(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRequest {
            field,
            message: message.into(),
        })
    }

    /// Creates a verse not found error echoing the requested reference.
    #[must_use]
    pub fn verse_not_found(reference: impl Into<String>) -> Self {
        Self::new(ErrorKind::VerseNotFound {
            reference: reference.into(),
        })
    }

    /// Creates a provider unavailable error.
    #[must_use]
    pub fn provider_unavailable(provider: ProviderId, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::ProviderUnavailable {
            provider,
            reason: reason.into(),
        })
    }

    /// Creates a synthesis failure error.
    #[must_use]
    pub fn synthesis_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SynthesisFailure(message.into()))
    }

    /// Creates an invalid catalog error.
    #[must_use]
    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCatalog(message.into()))
    }

    /// Creates a cancellation error.
    #[must_use]
    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled)
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error should be reported as a client (400-class) error.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Malformed book, chapter or verse input.
    #[error("invalid request: {field}: {message}")]
    InvalidRequest {
        /// The input field that failed validation.
        field: &'static str,
        /// Description of the problem.
        message: String,
    },

    /// The resolved chapter does not contain the requested verse numbers.
    #[error("verse not available: {reference}")]
    VerseNotFound {
        /// Human-readable reference that was requested.
        reference: String,
    },

    /// An individual provider failed. Never escapes the orchestrator.
    #[error("provider {provider} unavailable: {reason}")]
    ProviderUnavailable {
        /// The provider that failed.
        provider: ProviderId,
        /// Transport or parse failure description.
        reason: String,
    },

    /// The synthesizer could not produce content (a bug in the static tables).
    #[error("synthesis failure: {0}")]
    SynthesisFailure(String),

    /// The book catalog or versions registry failed validation.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// The caller cancelled the resolution.
    #[error("resolution cancelled")]
    Cancelled,

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns true for kinds caused by the request rather than the system.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. } | Self::VerseNotFound { .. })
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Book as requested or resolved.
    pub book: Option<String>,
    /// Chapter number.
    pub chapter: Option<u32>,
    /// Provider tier involved, if any.
    pub provider: Option<ProviderId>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the book.
    #[must_use]
    pub fn with_book(mut self, book: impl Into<String>) -> Self {
        self.book = Some(book.into());
        self
    }

    /// Sets the chapter.
    #[must_use]
    pub fn with_chapter(mut self, chapter: u32) -> Self {
        self.chapter = Some(chapter);
        self
    }

    /// Sets the provider.
    #[must_use]
    pub fn with_provider(mut self, provider: ProviderId) -> Self {
        self.provider = Some(provider);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(book) = &self.book {
            write!(f, "at {book}")?;
            if let Some(chapter) = self.chapter {
                write!(f, " {chapter}")?;
            }
        }
        if let Some(provider) = self.provider {
            write!(f, " via {provider}")?;
        }
        Ok(())
    }
}
