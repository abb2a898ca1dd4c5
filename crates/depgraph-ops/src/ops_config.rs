//! Operation: display the validated configuration.

use console::Style;
use depgraph_core::config::Config;

/// Print each configuration value with its label.
pub fn show(config: &Config) {
    let bold = Style::new().bold();
    for (label, value) in config.summary() {
        println!("  {:<10} {value}", bold.apply_to(format!("{label}:")));
    }
}
