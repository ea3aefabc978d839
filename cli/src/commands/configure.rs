//! Persist API settings to the config file.

use anyhow::{Result, bail};
use tracing::instrument;

use crate::config::Config;
use crate::output::Output;

/// Merge the given values into `config` and report whether anything changed.
fn apply(config: &mut Config, api_url: Option<String>, token: Option<String>) -> bool {
    let mut changed = false;
    if let Some(url) = api_url {
        config.api.base_url = Some(url);
        changed = true;
    }
    if let Some(token) = token {
        // An empty token removes the stored one.
        config.api.token = Some(token).filter(|t| !t.is_empty());
        changed = true;
    }
    changed
}

#[instrument(skip_all, name = "configure")]
pub fn run_configure(
    mut config: Config,
    api_url: Option<String>,
    token: Option<String>,
) -> Result<()> {
    let out = Output::new();

    if !apply(&mut config, api_url, token) {
        let path = Config::config_path()?;
        out.header("Current configuration");
        out.labeled("File", path.display());
        out.labeled(
            "API URL",
            config.api.base_url.as_deref().unwrap_or("(default)"),
        );
        out.labeled(
            "Token",
            if config.api.token.is_some() {
                "(set)"
            } else {
                "(not set)"
            },
        );
        return Ok(());
    }

    if config
        .api
        .base_url
        .as_deref()
        .is_some_and(|url| url.trim().is_empty())
    {
        bail!("API URL must not be empty");
    }

    let path = config.save()?;
    out.success(format!("Saved configuration to {}", path.display()));
    Ok(())
}
