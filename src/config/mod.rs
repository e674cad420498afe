mod credentials;
mod defaults;
mod options;
mod validation;

use crate::error::{MistralError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use credentials::Credentials;
pub use defaults::{
    default_address, ADDRESS_ENV, API_KEY_ENV, DEFAULT_ADDRESS, SERVER_SENT_EVENTS_ENV,
};
pub use options::{ConnectionOptions, Options, RequestOptions};
pub use validation::{expand_env_var_in_string, normalize_address, parse_flag};

/// Construction-time configuration, as written by callers or read from a
/// config file.
///
/// ```yaml
/// credentials:
///   api_key: ${MISTRAL_API_KEY}
/// options:
///   server_sent_events: true
///   connection:
///     request:
///       timeout: 120
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub options: Options,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.credentials.api_key = Some(api_key.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.credentials.address = Some(address.into());
        self
    }

    pub fn server_sent_events(mut self, enabled: bool) -> Self {
        self.options.server_sent_events = Some(enabled);
        self
    }

    pub fn request_options(mut self, request: RequestOptions) -> Self {
        self.options.connection.request = request;
        self
    }

    /// Load the first config file found in the search path, or the default
    /// configuration when there is none.
    pub fn load() -> anyhow::Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str());
        let mut config: Config = if extension == Some("yaml") || extension == Some("yml") {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))?
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))?
        };

        debug!(path = %path.display(), "Loaded config file");

        config.credentials.api_key = config
            .credentials
            .api_key
            .as_deref()
            .map(expand_env_var_in_string);
        config.credentials.address = config
            .credentials
            .address
            .as_deref()
            .map(expand_env_var_in_string);

        Ok(config)
    }

    /// Environment variables win over file values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(api_key) = env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()) {
            self.credentials.api_key = Some(api_key);
        }

        if let Some(address) = env::var(ADDRESS_ENV).ok().filter(|a| !a.trim().is_empty()) {
            self.credentials.address = Some(address);
        }

        if let Some(enabled) = env::var(SERVER_SENT_EVENTS_ENV)
            .ok()
            .and_then(|v| parse_flag(&v))
        {
            self.options.server_sent_events = Some(enabled);
        }

        self
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory first, so a project can override the user config
        for extension in ["yaml", "yml", "json"] {
            paths.push(PathBuf::from(format!(
                "{}.{}",
                defaults::LOCAL_CONFIG_STEM,
                extension
            )));
        }

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join(defaults::CONFIG_DIR_NAME);
            for extension in ["yaml", "yml", "json"] {
                paths.push(config_dir.join(format!("config.{}", extension)));
            }
        }

        paths
    }
}

/// The resolved, immutable settings a [`Client`](crate::Client) runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    /// Absolute base URL, always ending with a single `/`.
    pub address: String,
    pub server_sent_events: bool,
    pub request_options: RequestOptions,
}

impl ClientConfig {
    pub fn new(config: Config) -> Result<Self> {
        let Config {
            credentials,
            options,
        } = config;

        let address = match credentials.address.as_deref() {
            Some(address) if !address.trim().is_empty() => normalize_address(address),
            _ => default_address(),
        };

        if credentials.api_key.is_none() && address == default_address() {
            return Err(MistralError::MissingCredential(
                "Missing API Key, which is required.".to_string(),
            ));
        }

        Ok(Self {
            api_key: credentials.api_key,
            address,
            server_sent_events: options
                .server_sent_events
                .unwrap_or_else(defaults::default_server_sent_events),
            request_options: options.connection.request,
        })
    }
}
