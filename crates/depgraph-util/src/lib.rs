//! Shared utilities for depgraph.
//!
//! This crate provides cross-cutting concerns used by all other depgraph crates:
//! the unified error type and Cargo-style terminal status output.

pub mod errors;
pub mod progress;
