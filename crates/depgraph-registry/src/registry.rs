//! Live registry backend.

use depgraph_util::errors::DepgraphError;
use reqwest::blocking::Client;

use crate::document::PackageDocument;
use crate::download;
use crate::{Dependencies, DependencySource};

/// Default public registry.
pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Looks packages up at `<base_url>/<name>`.
#[derive(Debug, Clone)]
pub struct RegistrySource {
    client: Client,
    base_url: String,
}

impl RegistrySource {
    pub fn new(base_url: &str) -> miette::Result<Self> {
        Ok(Self::with_client(download::build_client()?, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Document URL for a package. Scoped names keep their `@` and encode the `/`.
    ///
    /// `@types/node` under `https://registry.npmjs.org` becomes
    /// `https://registry.npmjs.org/@types%2fnode`
    pub fn package_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name.replace('/', "%2f"))
    }

    /// Fetch and decode the package document for `name`.
    pub fn fetch_document(&self, name: &str) -> miette::Result<PackageDocument> {
        let url = self.package_url(name);
        let body = download::fetch_text(&self.client, &url)?;
        PackageDocument::parse(&body).map_err(|e| {
            DepgraphError::Decode {
                message: format!("Invalid package document from {url}: {e}"),
            }
            .into()
        })
    }
}

impl DependencySource for RegistrySource {
    fn fetch_direct(&self, name: &str, version: &str) -> miette::Result<Dependencies> {
        let doc = self.fetch_document(name)?;
        let selected = doc.select_version(version);
        tracing::debug!(package = name, requested = version, ?selected, "selected version");
        Ok(doc.dependencies_for(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> RegistrySource {
        RegistrySource::with_client(Client::new(), base)
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let src = source("https://registry.example.com/");
        assert_eq!(src.base_url(), "https://registry.example.com");
        assert_eq!(
            src.package_url("lodash"),
            "https://registry.example.com/lodash"
        );
    }

    #[test]
    fn scoped_package_url() {
        let src = source(NPM_REGISTRY_URL);
        assert_eq!(
            src.package_url("@types/node"),
            "https://registry.npmjs.org/@types%2fnode"
        );
    }
}
