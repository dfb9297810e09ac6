//! Deterministic last-resort content for Lectern.
//!
//! This crate provides:
//! - [`Synthesizer`] - Always produces a populated chapter for any book and chapter
//! - [`CuratedChapter`] - Fully authored chapters returned verbatim
//! - [`PhraseCategory`] - Book classification that drives generated text
//!
//! Nothing here performs I/O or suspends; every function is a pure mapping
//! from its inputs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod curated;
pub mod synthesizer;

pub use category::{PhraseCategory, select_phrase};
pub use curated::{CuratedChapter, curated_chapter, curated_chapters};
pub use synthesizer::{Synthesizer, generated_text};
