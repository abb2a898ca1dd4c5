//! Graph construction: depth-bounded, cycle-tolerant, memoized depth-first traversal.
//!
//! Each package passes through these checks before it is expanded:
//!
//! 1. name contains the filter substring: dropped, no node event, no expansion
//! 2. node event emitted
//! 3. already on the current recursion path: stop (cycle tolerated)
//! 4. depth reached `max_depth`: stop (the package stays a leaf)
//! 5. already fully expanded: stop (memoized)
//!
//! Otherwise its direct dependencies are fetched, each one is recorded as an
//! edge and visited at `depth + 1`. A fetch failure is logged and treated as
//! "no dependencies" so one unreachable package never aborts the build.

use std::collections::HashSet;

use depgraph_registry::DependencySource;

use crate::events::GraphObserver;
use crate::graph::DependencyGraph;

/// Traversal limits for one build.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Packages at this depth are recorded but not expanded. The root is depth 0.
    pub max_depth: u32,
    /// Packages whose name contains this substring are skipped. Empty disables filtering.
    pub filter: String,
}

impl BuildOptions {
    fn is_filtered(&self, name: &str) -> bool {
        !self.filter.is_empty() && name.contains(self.filter.as_str())
    }
}

/// A dependency lookup that failed and was degraded to "no dependencies".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub package: String,
    pub version: String,
    pub message: String,
}

/// The output of graph construction.
#[derive(Debug, Default)]
pub struct Resolution {
    pub graph: DependencyGraph,
    /// Lookups that failed, in the order they happened.
    pub failures: Vec<FetchFailure>,
    /// Number of packages that were expanded (fetched).
    pub expanded: usize,
}

/// Build the dependency graph of `root` at `version`.
pub fn build<S: DependencySource + ?Sized>(
    root: &str,
    version: &str,
    options: &BuildOptions,
    source: &S,
    observer: &mut dyn GraphObserver,
) -> Resolution {
    let mut builder = GraphBuilder {
        source,
        options,
        observer,
        graph: DependencyGraph::new(),
        path: HashSet::new(),
        resolved: HashSet::new(),
        failures: Vec::new(),
    };
    builder.visit(root, version, 0);

    tracing::debug!(
        root,
        expanded = builder.resolved.len(),
        edges = builder.graph.edge_count(),
        failures = builder.failures.len(),
        "graph built"
    );
    Resolution {
        expanded: builder.resolved.len(),
        graph: builder.graph,
        failures: builder.failures,
    }
}

/// Transient state of one [`build`] call.
struct GraphBuilder<'a, S: ?Sized> {
    source: &'a S,
    options: &'a BuildOptions,
    observer: &'a mut dyn GraphObserver,
    graph: DependencyGraph,
    /// Packages with an in-progress frame on the recursion path.
    path: HashSet<String>,
    /// Packages whose expansion has completed.
    resolved: HashSet<String>,
    failures: Vec<FetchFailure>,
}

impl<S: DependencySource + ?Sized> GraphBuilder<'_, S> {
    fn visit(&mut self, name: &str, version: &str, depth: u32) {
        if self.options.is_filtered(name) {
            tracing::debug!(package = name, filter = %self.options.filter, "filtered out");
            return;
        }

        self.observer.on_node(name);

        if self.path.contains(name) {
            tracing::debug!(package = name, "already on path, cycle tolerated");
            return;
        }
        if depth >= self.options.max_depth {
            return;
        }
        if self.resolved.contains(name) {
            return;
        }

        self.path.insert(name.to_string());
        tracing::debug!(package = name, version, depth, "expanding");

        let deps = match self.source.fetch_direct(name, version) {
            Ok(deps) => deps,
            Err(e) => {
                tracing::warn!(package = name, version, "failed to fetch dependencies: {e}");
                self.failures.push(FetchFailure {
                    package: name.to_string(),
                    version: version.to_string(),
                    message: e.to_string(),
                });
                Default::default()
            }
        };

        for (dep, dep_version) in &deps {
            self.graph.add_edge(name, dep);
            self.observer.on_edge(name, dep);
            self.visit(dep, dep_version, depth + 1);
        }

        self.path.remove(name);
        self.resolved.insert(name.to_string());
    }
}
