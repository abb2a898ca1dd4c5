//! Graphviz DOT rendering of the nodes and edges discovered during a build.

use std::collections::HashMap;
use std::path::Path;

use depgraph_resolver::events::GraphObserver;
use depgraph_util::errors::DepgraphError;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};

/// Collects discovery events into a deduplicated directed graph.
#[derive(Debug, Default)]
pub struct DotRenderer {
    graph: DiGraph<String, &'static str>,
    index: HashMap<String, NodeIndex>,
}

impl DotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.index.insert(name.to_string(), idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node names in discovery order.
    pub fn node_names(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[Config::EdgeNoLabel]))
    }

    /// Write the DOT document to `path`.
    pub fn write(&self, path: &Path) -> miette::Result<()> {
        std::fs::write(path, self.to_dot()).map_err(DepgraphError::Io)?;
        Ok(())
    }
}

impl GraphObserver for DotRenderer {
    fn on_node(&mut self, name: &str) {
        self.node(name);
    }

    fn on_edge(&mut self, from: &str, to: &str) {
        let a = self.node(from);
        let b = self.node(to);
        if !self.graph.contains_edge(a, b) {
            self.graph.add_edge(a, b, "");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_events_collapse() {
        let mut r = DotRenderer::new();
        r.on_node("a");
        r.on_node("a");
        r.on_edge("a", "b");
        r.on_edge("a", "b");
        r.on_node("b");
        assert_eq!(r.node_count(), 2);
        assert_eq!(r.edge_count(), 1);
        assert_eq!(r.node_names(), vec!["a", "b"]);
    }

    #[test]
    fn dot_output_contains_labels_and_edges() {
        let mut r = DotRenderer::new();
        r.on_edge("express", "accepts");
        let dot = r.to_dot();
        assert!(dot.starts_with("digraph {"), "got: {dot}");
        assert!(dot.contains("label = \"express\""));
        assert!(dot.contains("label = \"accepts\""));
        assert!(dot.contains("0 -> 1"));
    }
}
