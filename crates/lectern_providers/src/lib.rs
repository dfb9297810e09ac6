//! External content providers for Lectern.
//!
//! This crate provides:
//! - [`Provider`] - The adapter contract shared by every tier
//! - [`PublicEndpointAdapter`] - Free JSON endpoint addressed by short book codes
//! - [`KeyedApiAdapter`] - Credentialed JSON API with `book.chapter:verse` references
//! - [`ScrapeAdapter`] - HTML passage pages, parsed by [`html::parse_verses`]
//! - [`TransportConfig`] - Base URLs, timeout and user agent for the HTTP client
//!
//! # Contract
//!
//! Adapters never fail: every outcome is a [`ProviderOutcome`] that is either
//! populated or empty with a reason. A missing book code, a missing
//! translation id or a missing credential short-circuits to an empty outcome
//! without a network call.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod html;
pub mod keyed_api;
pub mod provider;
pub mod public_endpoint;
pub mod scrape;
pub mod transport;

pub use keyed_api::KeyedApiAdapter;
pub use provider::{ChapterRequest, Provider, ProviderOutcome};
pub use public_endpoint::PublicEndpointAdapter;
pub use scrape::ScrapeAdapter;
pub use transport::{TransportConfig, build_client};
