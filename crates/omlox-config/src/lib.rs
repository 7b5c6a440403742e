//! # omlox-config
//!
//! Layered configuration loading for the omlox hub client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`OMLOX_*` prefix, `__` as separator)
//! 2. Project-level `omlox.toml`
//! 3. User-level `~/.config/omlox/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `OMLOX_HUB__URL` -> `hub.url`, `OMLOX_HUB__TOKEN` -> `hub.token`, etc.
//!
//! ```no_run
//! use omlox_config::OmloxConfig;
//!
//! let config = OmloxConfig::load_with_dotenv().expect("config");
//! if config.hub.is_configured() {
//!     println!("Hub: {}", config.hub.url);
//! }
//! ```

mod error;
mod hub;

pub use error::ConfigError;
pub use hub::HubConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config file.
pub const PROJECT_CONFIG_FILE: &str = "omlox.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OmloxConfig {
    #[serde(default)]
    pub hub: HubConfig,
}

impl OmloxConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    /// A missing `.env` is not an error.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers can layer extra providers (e.g. CLI flags) on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("OMLOX_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("omlox").join("config.toml"))
    }
}
