//! Core data types for depgraph.
//!
//! This crate defines the run configuration (loaded from `depgraph.toml` and
//! validated against a fixed schema) and the traversal modes it selects.
//!
//! This crate is intentionally free of network I/O.

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "depgraph.toml";

/// Deepest traversal a configuration may request.
pub const MAX_DEPTH_LIMIT: u32 = 10;

pub mod config;
pub mod mode;
