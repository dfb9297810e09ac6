//! Book catalog, verse-count tables, and translation versions for Lectern.
//!
//! This crate provides:
//! - [`BookDescriptor`] - One book's names, classification, provider codes and verse counts
//! - [`Catalog`] - Validated lookup from any accepted spelling to a descriptor
//! - [`Version`] / [`VersionRegistry`] - Translation codes and their language tracks
//!
//! Everything here is immutable after construction and shared across requests
//! without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod book;
pub mod catalog;
mod data;
pub mod versions;

pub use book::{BookDescriptor, DEFAULT_VERSE_COUNT, Genre, Testament};
pub use catalog::{Catalog, lookup_key, standard_books};
pub use versions::{Version, VersionRegistry};
