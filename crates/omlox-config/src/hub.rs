//! Hub connection settings.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HubConfig {
    /// Base URL of the hub API (e.g., `https://hub.example.com/v2`).
    #[serde(default)]
    pub url: String,

    /// Bearer token sent as `Authorization`. Empty means anonymous.
    #[serde(default)]
    pub token: String,

    /// Per-request transport timeout in seconds. `0` disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
            headers: BTreeMap::new(),
        }
    }
}

impl HubConfig {
    /// Check if the hub URL is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// The request timeout, or `None` when disabled.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Check that the hub can be reached with these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `url` is empty, or
    /// [`ConfigError::InvalidValue`] when it is not an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "hub".to_string(),
            });
        }
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "hub.url".to_string(),
                reason: format!("'{}' is not an http(s) URL", self.url),
            });
        }
        Ok(())
    }
}
