//! Operation: derive and print the dependency-first load order.

use depgraph_core::config::Config;
use depgraph_resolver::builder::Resolution;
use depgraph_resolver::order::{self, SortError};
use depgraph_util::progress;

/// Build the graph and print the load order of the root package.
///
/// A cycle or a root missing from the graph is reported and leaves the order
/// empty; neither is an error for the run.
pub fn order(config: &Config) -> miette::Result<()> {
    let result = crate::resolve(config, &mut ())?;

    match load_sequence(&config.package_name, &result) {
        Ok(sequence) => {
            for (i, name) in sequence.iter().enumerate() {
                println!("{:>3}. {name}", i + 1);
            }
        }
        Err(e @ SortError::Cycle { .. }) => {
            progress::status_warn("Cycle", &e.to_string());
            println!("No load order: the dependency graph is cyclic.");
        }
        Err(e @ SortError::NodeNotFound { .. }) => {
            progress::status_warn("Missing", &e.to_string());
            println!("No load order.");
        }
    }
    Ok(())
}

/// Load order of `root` within `result`.
///
/// A root that was fetched without error but declares no dependencies has no
/// graph entry; its order is the root alone.
pub fn load_sequence(root: &str, result: &Resolution) -> Result<Vec<String>, SortError> {
    match order::load_order(root, &result.graph) {
        Err(SortError::NodeNotFound { .. })
            if result.failures.is_empty() && result.expanded > 0 =>
        {
            Ok(vec![root.to_string()])
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depgraph_registry::fixture::{parse_fixture, FixtureSource};
    use depgraph_resolver::builder::{build, BuildOptions, FetchFailure};

    fn resolve(json: &str, root: &str, max_depth: u32) -> Resolution {
        let src = FixtureSource::from_document(parse_fixture(json).unwrap());
        let opts = BuildOptions {
            max_depth,
            filter: String::new(),
        };
        build(root, "latest", &opts, &src, &mut ())
    }

    #[test]
    fn leaf_root_orders_itself() {
        let result = resolve(r#"{"A": []}"#, "A", 3);
        assert!(result.graph.is_empty());
        assert_eq!(load_sequence("A", &result).unwrap(), vec!["A"]);
    }

    #[test]
    fn unexpanded_root_is_not_found() {
        let result = resolve(r#"{"A": ["B"]}"#, "A", 0);
        assert!(matches!(
            load_sequence("A", &result),
            Err(SortError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn failed_root_is_not_found() {
        let mut result = resolve(r#"{"A": []}"#, "A", 3);
        result.failures.push(FetchFailure {
            package: "A".to_string(),
            version: "latest".to_string(),
            message: "Network error: timed out".to_string(),
        });
        assert!(matches!(
            load_sequence("A", &result),
            Err(SortError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn regular_order_is_unchanged() {
        let result = resolve(r#"{"A": ["B", "C"], "C": ["B"]}"#, "A", 3);
        assert_eq!(load_sequence("A", &result).unwrap(), vec!["B", "C", "A"]);
    }
}
