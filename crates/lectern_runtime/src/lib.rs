//! Reading shell, CLI and output formatting for Lectern.
//!
//! This crate provides:
//! - [`Repl`] - Interactive reading shell
//! - [`ReferenceParser`] - Human references like `1 Cor 13:4-7` into queries
//! - [`Session`] - Shell state and the blocking bridge to the async resolver
//! - [`settings`] - Engine configuration from the environment
//! - [`OutputFormat`] - Text and JSON rendering

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod format;
pub mod reference;
pub mod repl;
pub mod session;
pub mod settings;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use format::{OutputFormat, Resolved};
pub use reference::{Reference, ReferenceParser};
pub use repl::Repl;
pub use session::Session;
pub use settings::{config_from_env, config_from_lookup};
