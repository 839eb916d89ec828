//! # cz-config
//!
//! Layered configuration loading for the CHALLENGERZ console using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CHALLENGERZ_*` prefix, `__` as separator)
//! 2. Project-level `.challengerz/config.toml`
//! 3. User-level `~/.config/challengerz/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CHALLENGERZ_API__BASE_URL` -> `api.base_url`,
//! `CHALLENGERZ_SESSION__DIR` -> `session.dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use cz_config::CzConfig;
//!
//! let config = CzConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url_trimmed());
//! ```

mod api;
mod error;
mod general;
mod session;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix shared by every environment variable the console reads.
pub const ENV_PREFIX: &str = "CHALLENGERZ_";

/// Project-local config path, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".challengerz/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CzConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CzConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory or one of its parents.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(error) if error.not_found() => {}
            Err(error) => tracing::warn!(%error, "ignoring unreadable .env file"),
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check values that would otherwise fail late, on the first request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()
    }

    /// The default configuration rendered as TOML,
    /// suitable for `cz config init`.
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// Render this configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("challengerz").join("config.toml"))
    }
}
