//! Lectern - Scripture content resolution engine
//!
//! This crate re-exports all layers of the Lectern system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: lectern_runtime    - Reading shell, CLI, output formatting
//! Layer 3: lectern_engine     - Request normalization, provider chains, response assembly
//! Layer 2: lectern_providers  - Public endpoint, keyed API and scrape adapters
//! Layer 1: lectern_catalog    - Books, verse counts, versions
//!          lectern_synthesis  - Curated corpus and deterministic generated text
//! Layer 0: lectern_foundation - Core types (Verse, ProviderId, Error)
//! ```

pub use lectern_catalog as catalog;
pub use lectern_engine as engine;
pub use lectern_foundation as foundation;
pub use lectern_providers as providers;
pub use lectern_runtime as runtime;
pub use lectern_synthesis as synthesis;
