//! Core types for Lectern.
//!
//! This crate provides:
//! - [`Verse`] - The canonical unit returned by every resolution
//! - [`ProviderId`] - Identifiers for the external content sources
//! - [`LanguageTrack`] - Which orchestration path a version belongs to
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod types;
pub mod verse;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use types::{LanguageTrack, ProviderId};
pub use verse::{Verse, VerseList, is_canonical_chapter, normalize_chapter};
