//! Dependency sources: where the graph builder learns a package's direct dependencies.
//!
//! Two backends implement [`DependencySource`]: [`registry::RegistrySource`] queries a
//! live package registry, [`fixture::FixtureSource`] answers from a static JSON
//! document for deterministic runs.

use std::collections::BTreeMap;

pub mod document;
pub mod download;
pub mod fixture;
pub mod registry;

/// Direct dependencies of one package: name to version specifier.
pub type Dependencies = BTreeMap<String, String>;

/// Version specifier that asks for the registry's `latest` dist-tag.
pub const LATEST: &str = "latest";

/// A backend able to list the direct dependencies of a package.
pub trait DependencySource {
    /// Direct dependencies of `name` at `version`.
    ///
    /// An unknown package or unresolvable version yields an empty map; transport
    /// and decode failures are returned as errors.
    fn fetch_direct(&self, name: &str, version: &str) -> miette::Result<Dependencies>;
}

impl<S: DependencySource + ?Sized> DependencySource for &S {
    fn fetch_direct(&self, name: &str, version: &str) -> miette::Result<Dependencies> {
        (**self).fetch_direct(name, version)
    }
}

impl<S: DependencySource + ?Sized> DependencySource for Box<S> {
    fn fetch_direct(&self, name: &str, version: &str) -> miette::Result<Dependencies> {
        (**self).fetch_direct(name, version)
    }
}
