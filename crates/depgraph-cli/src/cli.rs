//! CLI argument definitions for depgraph.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "depgraph",
    version,
    about = "Discover a package's transitive dependencies and derive a load order",
    long_about = "depgraph walks a package registry (or a static JSON fixture) up to a bounded \
                  depth, builds the dependency graph, and orders it so every package comes \
                  after its dependencies."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = depgraph_core::CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Override the root package name
    #[arg(short, long, global = true)]
    pub package: Option<String>,

    /// Override the root package version (`latest` or an exact version)
    #[arg(long, global = true)]
    pub package_version: Option<String>,

    /// Override the maximum traversal depth (0-10)
    #[arg(short, long, global = true)]
    pub depth: Option<i64>,

    /// Override the substring filter; matching packages are not expanded
    #[arg(short, long, global = true)]
    pub filter: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the validated configuration
    Config,

    /// Build the dependency graph and print it as a tree
    Tree {
        /// Maximum depth of the printed tree
        #[arg(long)]
        print_depth: Option<usize>,
        /// Write the discovered graph as Graphviz DOT
        #[arg(long, value_name = "FILE")]
        dot: Option<PathBuf>,
        /// Print only the adjacency list
        #[arg(long)]
        flat: bool,
        /// Confirm the fixture location and root package interactively
        #[arg(short, long)]
        interactive: bool,
    },

    /// Build the dependency graph and print the load order
    Order {
        /// Confirm the fixture location and root package interactively
        #[arg(short, long)]
        interactive: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
