//! Command dispatch and handler modules.

mod config;
mod order;
mod tree;

use depgraph_core::config::{Config, ConfigOverrides};
use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        Command::Config => config::exec(&config),
        Command::Tree {
            print_depth,
            dot,
            flat,
            interactive,
        } => tree::exec(config, print_depth, dot, flat, interactive),
        Command::Order { interactive } => order::exec(config, interactive),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let overrides = ConfigOverrides {
        package_name: cli.package.clone(),
        package_version: cli.package_version.clone(),
        max_depth: cli.depth,
        filter_substring: cli.filter.clone(),
    };
    Config::load(&cli.config, &overrides)
}
