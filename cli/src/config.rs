//! Configuration file handling for the CLI.
//!
//! Stores the API address and token in `$XDG_CONFIG_HOME/useradmin/config.toml`.
//! Resolution order for the effective [`BusinessConfig`]:
//! command-line flags, then `USERADMIN_*` environment variables, then this
//! file, then built-in defaults.

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use useradmin_business::BusinessConfig;

/// CLI configuration stored on disk
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
}

impl Config {
    /// `$XDG_CONFIG_HOME/useradmin/config.toml` on Linux, the platform
    /// equivalent elsewhere.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Failed to determine config directory")?;
        Ok(config_dir.join("useradmin").join("config.toml"))
    }

    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Build the effective business config.
    pub fn resolve(
        &self,
        api_url: Option<String>,
        token: Option<String>,
    ) -> Result<BusinessConfig> {
        let mut config = BusinessConfig::default();
        if let Some(url) = &self.api.base_url {
            config.api_base_url.clone_from(url);
        }
        if let Some(file_token) = &self.api.token {
            config.auth_token = Some(file_token.clone());
        }

        let mut config = config
            .apply_env()
            .context("Failed to read USERADMIN_* environment variables")?;

        if let Some(url) = api_url {
            config.api_base_url = url;
        }
        if let Some(flag_token) = token {
            config.auth_token = Some(flag_token);
        }
        Ok(config)
    }
}
