//! Cross-layer integration tests for Lectern
//!
//! Tests that verify correct interaction between multiple crates, from typed
//! reference to rendered output.

mod shell;
