//! Operation: display the dependency tree and adjacency list.

use std::path::PathBuf;

use depgraph_core::config::Config;
use depgraph_util::progress;

use crate::render::DotRenderer;

/// Options for `depgraph tree`.
#[derive(Debug, Default)]
pub struct TreeOptions {
    /// Maximum tree depth to display (independent of traversal depth).
    pub depth: Option<usize>,
    /// Write discovered nodes and edges as Graphviz DOT to this file.
    pub dot: Option<PathBuf>,
    /// Print only the adjacency list.
    pub flat: bool,
}

/// Build the graph and print it.
pub fn tree(config: &Config, opts: &TreeOptions) -> miette::Result<()> {
    let mut renderer = DotRenderer::new();
    let result = crate::resolve(config, &mut renderer)?;

    if !opts.flat {
        print!("{}", result.graph.print_tree(&config.package_name, opts.depth));
        println!();
    }
    if result.graph.is_empty() {
        println!("No dependencies recorded for {}.", config.package_name);
    } else {
        print!("{}", result.graph);
    }

    if let Some(ref path) = opts.dot {
        renderer.write(path)?;
        progress::status_info(
            "Rendered",
            &format!(
                "{} nodes, {} edges to {}",
                renderer.node_count(),
                renderer.edge_count(),
                path.display()
            ),
        );
    }
    Ok(())
}
