//! Interactive confirmation of the fixture location and root package.

use std::io::IsTerminal;

use depgraph_core::config::Config;
use depgraph_util::errors::DepgraphError;
use dialoguer::Input;

/// Ask for the fixture location and root package, pre-filled from `config`.
///
/// Only fixture modes can be prompted for. When stdin is not a terminal the
/// configuration is returned unchanged.
pub fn confirm_fixture(mut config: Config) -> miette::Result<Config> {
    if !config.repo_mode.is_fixture() {
        return Err(DepgraphError::UnsupportedMode {
            message: format!(
                "interactive selection needs a fixture mode, configured mode is '{}'",
                config.repo_mode
            ),
        }
        .into());
    }
    if !std::io::stdin().is_terminal() {
        tracing::debug!("stdin is not a terminal, using configured fixture");
        return Ok(config);
    }

    config.repo_source = ask("Fixture location", &config.repo_source)?;
    config.package_name = ask("Root package", &config.package_name)?;
    Ok(config)
}

fn ask(prompt: &str, default: &str) -> miette::Result<String> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .map_err(|e| DepgraphError::Generic {
            message: format!("Prompt error: {e}"),
        })?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(DepgraphError::Config {
            message: format!("{prompt} must not be empty"),
        }
        .into());
    }
    Ok(answer.to_string())
}
