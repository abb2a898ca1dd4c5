//! Dependency-first load order over a finished [`DependencyGraph`].
//!
//! Three-colour depth-first search from a start package. Only the subgraph
//! reachable from the start is ordered; a grey-to-grey edge is a cycle and
//! aborts the whole sort.

use std::collections::HashMap;

use miette::Diagnostic;
use thiserror::Error;

use crate::graph::DependencyGraph;

/// Why no load order could be produced. Both cases are recoverable for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SortError {
    /// The dependency relation loops back through `from -> to`.
    #[error("Dependency cycle detected: {from} -> {to}")]
    #[diagnostic(help("A load order only exists for acyclic graphs"))]
    Cycle { from: String, to: String },

    /// The start package appears nowhere in the graph.
    #[error("Package '{node}' not found in the dependency graph")]
    NodeNotFound { node: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current recursion stack.
    Gray,
    /// Finished and emitted.
    Black,
}

/// Order the packages reachable from `start` so that each comes after all of its
/// direct dependencies.
pub fn load_order(start: &str, graph: &DependencyGraph) -> Result<Vec<String>, SortError> {
    if !graph.contains(start) {
        return Err(SortError::NodeNotFound {
            node: start.to_string(),
        });
    }

    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut order = Vec::new();
    visit(start, graph, &mut marks, &mut order)?;
    Ok(order)
}

fn visit<'g>(
    node: &'g str,
    graph: &'g DependencyGraph,
    marks: &mut HashMap<&'g str, Mark>,
    order: &mut Vec<String>,
) -> Result<(), SortError> {
    let Some(deps) = graph.dependencies_of(node) else {
        if marks.insert(node, Mark::Black).is_none() {
            order.push(node.to_string());
        }
        return Ok(());
    };

    marks.insert(node, Mark::Gray);
    for dep in deps {
        match marks.get(dep.as_str()) {
            None => visit(dep, graph, marks, order)?,
            Some(Mark::Gray) => {
                return Err(SortError::Cycle {
                    from: node.to_string(),
                    to: dep.clone(),
                });
            }
            Some(Mark::Black) => {}
        }
    }
    marks.insert(node, Mark::Black);
    order.push(node.to_string());
    Ok(())
}
