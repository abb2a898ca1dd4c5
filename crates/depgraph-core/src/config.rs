//! Run configuration loaded from `depgraph.toml`.
//!
//! The file is deserialized into [`RawConfig`] (every key optional), command-line
//! overrides are layered on top, and [`RawConfig::validate`] checks each key in
//! schema order, reporting the first one that fails.

use std::path::Path;

use depgraph_util::errors::DepgraphError;
use serde::Deserialize;

use crate::mode::{is_url, RepoMode};
use crate::MAX_DEPTH_LIMIT;

/// Configuration as written in the file, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    #[serde(default, alias = "package-name")]
    pub package_name: Option<String>,
    #[serde(default, alias = "repo-source")]
    pub repo_source: Option<String>,
    #[serde(default, alias = "repo-mode")]
    pub repo_mode: Option<String>,
    #[serde(default, alias = "package-version")]
    pub package_version: Option<String>,
    #[serde(default, alias = "max-depth")]
    pub max_depth: Option<i64>,
    #[serde(default, alias = "filter-substring")]
    pub filter_substring: Option<String>,
}

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub package_name: Option<String>,
    pub package_version: Option<String>,
    pub max_depth: Option<i64>,
    pub filter_substring: Option<String>,
}

/// A validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root package whose dependencies are discovered.
    pub package_name: String,
    /// Registry base URL, fixture path or fixture URL, depending on `repo_mode`.
    pub repo_source: String,
    pub repo_mode: RepoMode,
    /// Version specifier of the root package (`latest` or a concrete version).
    pub package_version: String,
    /// Maximum traversal depth, `0..=10`.
    pub max_depth: u32,
    /// Packages whose name contains this substring are never expanded. Empty disables filtering.
    pub filter_substring: String,
}

impl RawConfig {
    /// Parse a TOML document.
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            DepgraphError::Config {
                message: format!("Failed to parse configuration: {e}"),
            }
            .into()
        })
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Err(DepgraphError::Config {
                message: format!("Configuration file '{}' not found", path.display()),
            }
            .into());
        }
        let content = std::fs::read_to_string(path).map_err(|e| DepgraphError::Config {
            message: format!("Failed to read '{}': {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    /// Replace file values with any command-line overrides.
    pub fn apply(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(ref name) = overrides.package_name {
            self.package_name = Some(name.clone());
        }
        if let Some(ref version) = overrides.package_version {
            self.package_version = Some(version.clone());
        }
        if let Some(depth) = overrides.max_depth {
            self.max_depth = Some(depth);
        }
        if let Some(ref filter) = overrides.filter_substring {
            self.filter_substring = Some(filter.clone());
        }
        self
    }

    /// Check every key and produce a [`Config`].
    pub fn validate(self) -> miette::Result<Config> {
        let package_name = required("package_name", self.package_name)?;

        let repo_source = required("repo_source", self.repo_source)?;
        let repo_source = repo_source.trim().to_string();
        if !(is_url(&repo_source) || Path::new(&repo_source).exists()) {
            return Err(invalid(
                "repo_source",
                "must be an http(s) URL or an existing file path",
            ));
        }

        let repo_mode = required("repo_mode", self.repo_mode)?;
        let repo_mode: RepoMode = repo_mode.trim().parse().map_err(|_| {
            invalid(
                "repo_mode",
                "mode must be one of 'real', 'test_file' or 'test_url'",
            )
        })?;

        let package_version = required("package_version", self.package_version)?;
        if package_version != "latest" && !package_version.chars().any(|c| c.is_ascii_digit()) {
            return Err(invalid(
                "package_version",
                "version must contain a digit or be 'latest'",
            ));
        }

        let max_depth = self
            .max_depth
            .ok_or_else(|| invalid("max_depth", "required key is missing"))?;
        let max_depth = u32::try_from(max_depth)
            .ok()
            .filter(|d| *d <= MAX_DEPTH_LIMIT)
            .ok_or_else(|| {
                invalid(
                    "max_depth",
                    &format!("depth must be an integer from 0 to {MAX_DEPTH_LIMIT}"),
                )
            })?;

        Ok(Config {
            package_name: package_name.trim().to_string(),
            repo_source,
            repo_mode,
            package_version: package_version.trim().to_string(),
            max_depth,
            filter_substring: self.filter_substring.unwrap_or_default(),
        })
    }
}

impl Config {
    /// Load, override and validate the configuration at `path`.
    pub fn load(path: &Path, overrides: &ConfigOverrides) -> miette::Result<Self> {
        let raw = RawConfig::from_path(path)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        raw.apply(overrides).validate()
    }

    /// Human-readable `(label, value)` pairs for display.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Package", self.package_name.clone()),
            ("Source", self.repo_source.clone()),
            ("Mode", self.repo_mode.to_string()),
            ("Version", self.package_version.clone()),
            ("Max depth", self.max_depth.to_string()),
            (
                "Filter",
                if self.filter_substring.is_empty() {
                    "(none)".to_string()
                } else {
                    self.filter_substring.clone()
                },
            ),
        ]
    }
}

fn required(key: &str, value: Option<String>) -> miette::Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(invalid(key, "required key is missing")),
    }
}

fn invalid(key: &str, reason: &str) -> miette::Report {
    DepgraphError::Config {
        message: format!("'{key}': {reason}"),
    }
    .into()
}
