//! Session configuration: provider base URL, API key and HTTP knobs.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://api.nijivoice.com/api/platform/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const ENV_API_KEY: &str = "VOICE_STUDIO_API_KEY";
pub const ENV_BASE_URL: &str = "VOICE_STUDIO_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "VOICE_STUDIO_TIMEOUT_SECS";
pub const ENV_PROXY_URL: &str = "VOICE_STUDIO_PROXY_URL";

/// Provider connection settings for one session.
#[derive(Clone, Serialize, Deserialize)]
pub struct StudioConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent verbatim as the `x-api-key` header.
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

// The API key never ends up in logs.
impl fmt::Debug for StudioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudioConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("proxy_url", &self.proxy_url)
            .finish()
    }
}

impl StudioConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy_url: None,
        }
    }

    /// Override base URL (primarily for testing with mock servers)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    /// Build from `VOICE_STUDIO_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(ENV_API_KEY).ok_or_else(|| {
            Error::configuration_with_context(
                "API key required",
                ErrorContext::new().with_field_path(ENV_API_KEY),
            )
        })?;
        let mut config = Self::new(api_key);
        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = secs.parse::<u64>().map_err(|_| {
                Error::configuration_with_context(
                    format!("timeout must be a whole number of seconds, got {:?}", secs),
                    ErrorContext::new().with_field_path(ENV_TIMEOUT_SECS),
                )
            })?;
        }
        config.proxy_url = lookup(ENV_PROXY_URL);
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid config: {}", e),
                ErrorContext::new().with_source("config"),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_context(
                format!("cannot read config: {}", e),
                ErrorContext::new().with_details(path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "API key must not be empty",
                ErrorContext::new().with_field_path("api_key"),
            ));
        }
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(self.base_url.clone()),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("unsupported URL scheme: {}", url.scheme()),
                ErrorContext::new().with_field_path("base_url"),
            ));
        }
        Ok(())
    }
}
