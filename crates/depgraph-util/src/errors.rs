use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all depgraph operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DepgraphError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing, malformed or invalid configuration.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check depgraph.toml or the command-line overrides"))]
    Config { message: String },

    /// Network request to a registry or fixture URL failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// A registry document or fixture could not be decoded.
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// The traversal mode cannot be served by the configured source.
    #[error("Unsupported mode: {message}")]
    #[diagnostic(help("Use `real` or `test_url` with an http(s) URL, `test_file` with a local path"))]
    UnsupportedMode { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}
