//! Static fixture backend.
//!
//! A fixture is a JSON object mapping each package name to the list of its
//! dependency names, for example `{"A": ["B", "C"], "B": [], "C": ["B"]}`.
//! The document is read on the first lookup and reused for the lifetime of
//! the [`FixtureSource`]; version specifiers are not stored in the file, every
//! dependency is reported with [`FIXTURE_VERSION`].

use std::cell::OnceCell;
use std::collections::HashMap;
use std::path::PathBuf;

use depgraph_util::errors::DepgraphError;

use crate::download;
use crate::{Dependencies, DependencySource};

/// Placeholder version specifier attached to fixture dependencies.
pub const FIXTURE_VERSION: &str = "*";

/// Parsed fixture: package name to dependency names.
pub type FixtureDocument = HashMap<String, Vec<String>>;

/// Where the fixture document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureLocation {
    Path(PathBuf),
    Url(String),
}

impl std::fmt::Display for FixtureLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureLocation::Path(p) => write!(f, "{}", p.display()),
            FixtureLocation::Url(u) => f.write_str(u),
        }
    }
}

/// Dependency source backed by a fixture document, loaded lazily once.
#[derive(Debug)]
pub struct FixtureSource {
    location: FixtureLocation,
    document: OnceCell<FixtureDocument>,
}

impl FixtureSource {
    pub fn new(location: FixtureLocation) -> Self {
        Self {
            location,
            document: OnceCell::new(),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(FixtureLocation::Path(path.into()))
    }

    pub fn from_url(url: &str) -> Self {
        Self::new(FixtureLocation::Url(url.to_string()))
    }

    /// A source over an already-parsed document; no I/O is ever performed.
    pub fn from_document(document: FixtureDocument) -> Self {
        Self {
            location: FixtureLocation::Path(PathBuf::new()),
            document: OnceCell::from(document),
        }
    }

    pub fn location(&self) -> &FixtureLocation {
        &self.location
    }

    /// Whether the document has been read yet.
    pub fn is_loaded(&self) -> bool {
        self.document.get().is_some()
    }

    /// The fixture document, reading it on first use.
    pub fn document(&self) -> miette::Result<&FixtureDocument> {
        if let Some(doc) = self.document.get() {
            return Ok(doc);
        }
        let doc = self.load()?;
        tracing::debug!(location = %self.location, packages = doc.len(), "loaded fixture");
        Ok(self.document.get_or_init(|| doc))
    }

    fn load(&self) -> miette::Result<FixtureDocument> {
        let content = match &self.location {
            FixtureLocation::Path(path) => {
                std::fs::read_to_string(path).map_err(DepgraphError::Io)?
            }
            FixtureLocation::Url(url) => {
                let client = download::build_client()?;
                download::fetch_text(&client, url)?
            }
        };
        parse_fixture(&content).map_err(|e| {
            DepgraphError::Decode {
                message: format!("Invalid fixture {}: {e}", self.location),
            }
            .into()
        })
    }
}

/// Parse a fixture document.
pub fn parse_fixture(content: &str) -> Result<FixtureDocument, serde_json::Error> {
    serde_json::from_str(content)
}

impl DependencySource for FixtureSource {
    fn fetch_direct(&self, name: &str, _version: &str) -> miette::Result<Dependencies> {
        let doc = self.document()?;
        Ok(doc
            .get(name)
            .map(|deps| {
                deps.iter()
                    .map(|d| (d.clone(), FIXTURE_VERSION.to_string()))
                    .collect()
            })
            .unwrap_or_default())
    }
}
