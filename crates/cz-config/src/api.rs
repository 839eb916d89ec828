//! Backend API connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const fn default_timeout_secs() -> u64 {
    15
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend origin, e.g. `https://challengerz.example.org`. The `/api`
    /// prefix is added by the client.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Base URL without trailing slashes.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url_trimmed();
        if url.is_empty() {
            return Err(ConfigError::invalid("api.base_url", "must not be empty"));
        }
        let host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| {
                ConfigError::invalid("api.base_url", format!("'{url}' is not an http(s) URL"))
            })?;
        if host.is_empty() || host.starts_with('/') {
            return Err(ConfigError::invalid(
                "api.base_url",
                format!("'{url}' has no host"),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "api.timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "https://api.example.org//".into(),
            ..Default::default()
        };
        assert_eq!(config.base_url_trimmed(), "https://api.example.org");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_http_urls() {
        for bad in ["", "   ", "ftp://example.org", "localhost:5000", "http://"] {
            let config = ApiConfig {
                base_url: bad.into(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let err = config.validate().expect_err("zero timeout");
        assert!(err.to_string().contains("api.timeout_secs"));
    }
}
