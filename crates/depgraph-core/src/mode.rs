//! Traversal modes: which dependency source answers lookups.

use std::fmt;
use std::str::FromStr;

/// How dependencies are looked up during graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepoMode {
    /// Live package registry over HTTP.
    Real,
    /// Static JSON fixture on the local filesystem.
    TestFile,
    /// Static JSON fixture fetched once over HTTP.
    TestUrl,
}

impl RepoMode {
    pub const ALL: [RepoMode; 3] = [RepoMode::Real, RepoMode::TestFile, RepoMode::TestUrl];

    pub fn as_str(&self) -> &'static str {
        match self {
            RepoMode::Real => "real",
            RepoMode::TestFile => "test_file",
            RepoMode::TestUrl => "test_url",
        }
    }

    /// Whether this mode reads from a fixture document rather than a registry.
    pub fn is_fixture(&self) -> bool {
        matches!(self, RepoMode::TestFile | RepoMode::TestUrl)
    }

    /// Whether the `repo_source` for this mode must be an HTTP(S) URL.
    pub fn expects_url(&self) -> bool {
        matches!(self, RepoMode::Real | RepoMode::TestUrl)
    }
}

impl fmt::Display for RepoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepoMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RepoMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown mode '{s}'"))
    }
}

/// Whether a `repo_source` value names a remote location.
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
