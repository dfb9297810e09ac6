//! Integration tests for Layer 1: Synthesis
//!
//! Tests for the curated corpus and deterministic generated chapters.

mod generated;
