//! Handler for `depgraph config`.

use depgraph_core::config::Config;
use miette::Result;

pub fn exec(config: &Config) -> Result<()> {
    depgraph_ops::ops_config::show(config);
    Ok(())
}
