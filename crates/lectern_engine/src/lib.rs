//! Resolution engine for Lectern.
//!
//! This crate provides:
//! - [`EngineConfig`] - The immutable configuration passed in at construction
//! - [`RequestNormalizer`] - Validation and coercion of raw request parameters
//! - [`ProviderChain`] - The ordered provider tiers of one language track
//! - [`Orchestrator`] - Sequential tier evaluation with deterministic fallback
//! - [`ChapterResponse`] / [`PassageResponse`] - Assembled results
//! - [`Resolver`] - The façade tying the pieces together
//!
//! # Flow
//!
//! ```text
//! ChapterQuery / PassageQuery
//!   -> RequestNormalizer   (InvalidRequest on malformed book/chapter/verse)
//!   -> Orchestrator        (tiers in order, first non-empty wins)
//!   -> Synthesizer         (only when every tier came back empty)
//!   -> response assembly   (VerseNotFound when a range falls outside the chapter)
//! ```
//!
//! Provider failures never leave the orchestrator. Only `InvalidRequest`,
//! `VerseNotFound`, `Cancelled` and the unreachable `SynthesisFailure` reach
//! callers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chain;
pub mod config;
pub mod orchestrator;
pub mod request;
pub mod resolver;
pub mod response;

pub use chain::ProviderChain;
pub use config::{DEFAULT_REQUEST_DEADLINE, EngineConfig, LogVerbosity};
pub use orchestrator::{Orchestrator, ResolutionReport};
pub use request::{ChapterQuery, PassageQuery, RequestNormalizer, ResolutionRequest};
pub use resolver::Resolver;
pub use response::{ChapterResponse, PassageResponse, format_reference};
