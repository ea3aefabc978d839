use std::env::vars;

use log::info;
use serde::Deserialize;
use ustr::Ustr;

/// Prefix for environment variables read by [`BusinessConfig::from_env`].
pub const ENV_PREFIX: &str = "USERADMIN_";

/// Default backend address (the Go backend listens on 8080).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

const USERS_PATH: &str = "api/v1/users";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Bearer token for the protected `/api/v1` routes.
    pub auth_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    api_token: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            auth_token: None,
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Defaults overlaid with `USERADMIN_API_BASE_URL` / `USERADMIN_API_TOKEN`.
    pub fn from_env() -> Result<Self, serde_env::Error> {
        Self::default().apply_env()
    }

    /// Override fields whose environment variables are set.
    pub fn apply_env(self) -> Result<Self, serde_env::Error> {
        self.apply_vars(vars())
    }

    /// Same as [`Self::apply_env`] over an explicit variable list.
    pub fn apply_vars<I, K, V>(mut self, vars: I) -> Result<Self, serde_env::Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let prefixed: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|k| (k.to_owned(), value.into()))
            })
            .collect();

        let raw: RawConfig = serde_env::from_iter(prefixed)?;

        if let Some(url) = raw.api_base_url {
            info!("Using {ENV_PREFIX}API_BASE_URL: {url}");
            self.api_base_url = url;
        }
        if let Some(token) = raw.api_token.filter(|t| !t.is_empty()) {
            self.auth_token = Some(token);
        }
        Ok(self)
    }

    /// Full URL of the users collection, e.g. `http://host/api/v1/users`.
    ///
    /// An empty base yields the same-origin path `/api/v1/users`.
    pub fn users_url(&self) -> Ustr {
        let base = self.api_base_url.trim_end_matches('/');
        Ustr::from(&format!("{base}/{USERS_PATH}"))
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                DEFAULT_API_BASE_URL.to_owned()
            },
            auth_token: None,
        }
    }
}
