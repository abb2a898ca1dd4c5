//! Adjacency-list dependency graph and tree printing.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

/// Package name to its set of direct dependencies.
///
/// Only packages that were expanded and turned out to have dependencies own a key;
/// every other package appears solely as a member of some dependency set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `from -> to`. Returns `false` if the edge was already present.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string())
    }

    /// Direct dependencies of `name`, `None` if it has no adjacency entry.
    pub fn dependencies_of(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.adjacency.get(name)
    }

    /// Whether `name` owns an adjacency entry.
    pub fn has_entry(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Whether `name` appears anywhere in the graph, as a key or as a dependency.
    pub fn contains(&self, name: &str) -> bool {
        self.has_entry(name) || self.adjacency.values().any(|deps| deps.contains(name))
    }

    /// Every package in the graph, sorted.
    pub fn nodes(&self) -> BTreeSet<&str> {
        self.adjacency
            .iter()
            .flat_map(|(k, deps)| std::iter::once(k.as_str()).chain(deps.iter().map(String::as_str)))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// The underlying adjacency mapping.
    pub fn adjacency(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.adjacency
    }

    /// Print the graph as a tree rooted at `root`.
    ///
    /// A package whose subtree was already printed is shown once more with `(*)`
    /// and not expanded again; an edge back onto the current path is marked `(cycle)`.
    pub fn print_tree(&self, root: &str, max_depth: Option<usize>) -> String {
        let mut output = format!("{root}\n");
        let mut path = HashSet::new();
        let mut printed = HashSet::new();
        path.insert(root.to_string());
        printed.insert(root.to_string());

        if let Some(deps) = self.adjacency.get(root) {
            let count = deps.len();
            for (i, dep) in deps.iter().enumerate() {
                self.print_subtree(
                    &mut output,
                    dep,
                    "",
                    i == count - 1,
                    1,
                    max_depth,
                    &mut path,
                    &mut printed,
                );
            }
        }
        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        name: &str,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        path: &mut HashSet<String>,
        printed: &mut HashSet<String>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let deps = self.adjacency.get(name);

        if path.contains(name) {
            output.push_str(&format!("{prefix}{connector}{name} (cycle)\n"));
            return;
        }
        if deps.is_some() && !printed.insert(name.to_string()) {
            output.push_str(&format!("{prefix}{connector}{name} (*)\n"));
            return;
        }
        output.push_str(&format!("{prefix}{connector}{name}\n"));

        if max_depth.is_some_and(|max| depth >= max) {
            return;
        }
        let Some(deps) = deps else {
            return;
        };

        path.insert(name.to_string());
        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let count = deps.len();
        for (i, child) in deps.iter().enumerate() {
            self.print_subtree(
                output,
                child,
                &child_prefix,
                i == count - 1,
                depth + 1,
                max_depth,
                path,
                printed,
            );
        }
        path.remove(name);
    }
}

impl FromIterator<(String, String)> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut graph = DependencyGraph::new();
        for (from, to) in iter {
            graph.add_edge(&from, &to);
        }
        graph
    }
}

/// One line per key: `name -> dep1, dep2`.
impl fmt::Display for DependencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, deps) in &self.adjacency {
            let deps: Vec<&str> = deps.iter().map(String::as_str).collect();
            writeln!(f, "{name} -> {}", deps.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &str)]) -> DependencyGraph {
        edges
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn edges_are_sets() {
        let mut g = DependencyGraph::new();
        assert!(g.add_edge("a", "b"));
        assert!(!g.add_edge("a", "b"));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn contains_keys_and_values() {
        let g = graph(&[("a", "b")]);
        assert!(g.contains("a"));
        assert!(g.contains("b"));
        assert!(!g.contains("c"));
        assert!(g.has_entry("a"));
        assert!(!g.has_entry("b"));
    }

    #[test]
    fn nodes_are_sorted_and_distinct() {
        let g = graph(&[("c", "a"), ("b", "a"), ("c", "b")]);
        assert_eq!(g.nodes().into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn display_lists_keys() {
        let g = graph(&[("a", "c"), ("a", "b")]);
        assert_eq!(g.to_string(), "a -> b, c\n");
    }

    #[test]
    fn tree_printing() {
        let g = graph(&[("app", "a"), ("app", "b"), ("a", "c")]);
        let tree = g.print_tree("app", None);
        assert_eq!(tree, "app\n├── a\n│   └── c\n└── b\n");
    }

    #[test]
    fn tree_marks_repeated_subtrees() {
        let g = graph(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("d", "e")]);
        let tree = g.print_tree("a", None);
        assert!(tree.contains("│   └── d\n"));
        assert!(tree.contains("    └── d (*)\n"));
        assert_eq!(tree.matches(" e\n").count(), 1);
    }

    #[test]
    fn tree_marks_cycles() {
        let g = graph(&[("a", "b"), ("b", "a")]);
        let tree = g.print_tree("a", None);
        assert_eq!(tree, "a\n└── b\n    └── a (cycle)\n");
    }

    #[test]
    fn tree_respects_depth() {
        let g = graph(&[("a", "b"), ("b", "c")]);
        let tree = g.print_tree("a", Some(1));
        assert_eq!(tree, "a\n└── b\n");
    }

    #[test]
    fn tree_of_lone_root() {
        assert_eq!(DependencyGraph::new().print_tree("solo", None), "solo\n");
    }
}
