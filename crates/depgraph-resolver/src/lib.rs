//! Dependency graph engine: depth-bounded memoized traversal over a
//! [`DependencySource`](depgraph_registry::DependencySource), and
//! dependency-first load ordering of the resulting graph.

pub mod builder;
pub mod events;
pub mod graph;
pub mod order;
