//! Selects the dependency source for a traversal mode.

use depgraph_core::config::Config;
use depgraph_core::mode::{is_url, RepoMode};
use depgraph_registry::fixture::FixtureSource;
use depgraph_registry::registry::RegistrySource;
use depgraph_registry::DependencySource;
use depgraph_util::errors::DepgraphError;

/// Build the source described by `config.repo_mode` and `config.repo_source`.
///
/// The mode and the shape of the source must agree: `real` and `test_url` need an
/// http(s) URL, `test_file` a local path. Anything else is an unsupported mode.
pub fn open(config: &Config) -> miette::Result<Box<dyn DependencySource>> {
    check_mode(config.repo_mode, &config.repo_source)?;
    let source: Box<dyn DependencySource> = match config.repo_mode {
        RepoMode::Real => Box::new(RegistrySource::new(&config.repo_source)?),
        RepoMode::TestFile => Box::new(FixtureSource::from_path(&config.repo_source)),
        RepoMode::TestUrl => Box::new(FixtureSource::from_url(&config.repo_source)),
    };
    tracing::debug!(mode = %config.repo_mode, source = %config.repo_source, "opened dependency source");
    Ok(source)
}

/// Reject mode/source combinations no backend can serve.
pub fn check_mode(mode: RepoMode, source: &str) -> miette::Result<()> {
    let remote = is_url(source);
    if mode.expects_url() && !remote {
        return Err(DepgraphError::UnsupportedMode {
            message: format!("mode '{mode}' needs an http(s) URL, got '{source}'"),
        }
        .into());
    }
    if !mode.expects_url() && remote {
        return Err(DepgraphError::UnsupportedMode {
            message: format!("mode '{mode}' needs a local fixture path, got '{source}'"),
        }
        .into());
    }
    Ok(())
}
