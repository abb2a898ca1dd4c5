//! Handler for `depgraph order`.

use depgraph_core::config::Config;
use miette::Result;

pub fn exec(config: Config, interactive: bool) -> Result<()> {
    let config = if interactive {
        depgraph_ops::prompt::confirm_fixture(config)?
    } else {
        config
    };
    depgraph_ops::ops_order::order(&config)
}
