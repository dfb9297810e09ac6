//! Integration tests for Layer 0: Foundation
//!
//! Tests for error kinds and the chapter normalization invariant.

mod verses;
