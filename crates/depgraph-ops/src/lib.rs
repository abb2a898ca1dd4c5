pub mod ops_config;
pub mod ops_order;
pub mod ops_tree;
pub mod prompt;
pub mod render;
pub mod source;

use depgraph_core::config::Config;
use depgraph_resolver::builder::{self, BuildOptions, Resolution};
use depgraph_resolver::events::GraphObserver;
use depgraph_util::progress;

/// Open the configured source and build the dependency graph of the root package.
pub fn resolve(config: &Config, observer: &mut dyn GraphObserver) -> miette::Result<Resolution> {
    let source = source::open(config)?;
    let options = BuildOptions {
        max_depth: config.max_depth,
        filter: config.filter_substring.clone(),
    };

    progress::status(
        "Resolving",
        &format!(
            "{} {} ({}, depth {})",
            config.package_name, config.package_version, config.repo_mode, config.max_depth
        ),
    );
    let spinner = progress::spinner(&format!("Fetching dependencies of {}", config.package_name));
    let result = builder::build(
        &config.package_name,
        &config.package_version,
        &options,
        &*source,
        observer,
    );
    spinner.finish_and_clear();

    for failure in &result.failures {
        progress::status_warn(
            "Skipped",
            &format!("{} {}: {}", failure.package, failure.version, failure.message),
        );
    }
    progress::status(
        "Resolved",
        &format!(
            "{} packages expanded, {} edges",
            result.expanded,
            result.graph.edge_count()
        ),
    );
    Ok(result)
}
