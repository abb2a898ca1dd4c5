//! Handler for `depgraph tree`.

use std::path::PathBuf;

use depgraph_core::config::Config;
use depgraph_ops::ops_tree::{self, TreeOptions};
use miette::Result;

pub fn exec(
    config: Config,
    print_depth: Option<usize>,
    dot: Option<PathBuf>,
    flat: bool,
    interactive: bool,
) -> Result<()> {
    let config = if interactive {
        depgraph_ops::prompt::confirm_fixture(config)?
    } else {
        config
    };

    let opts = TreeOptions {
        depth: print_depth,
        dot,
        flat,
    };
    ops_tree::tree(&config, &opts)
}
