//! Scoring-service connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upstream origin the dashboard proxy forwards `/api/risk/*` to.
fn default_base_url() -> String {
    String::from("http://127.0.0.1:8000")
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Origin of the scoring service; request paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport timeout in seconds. `0` disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sent as `?limit=` on the ranking call when set.
    #[serde(default)]
    pub ranking_limit: Option<u32>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            ranking_limit: None,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let origin = self.origin();
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{}' is not an http(s) origin", self.base_url),
            });
        }
        if self.ranking_limit == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "api.ranking_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert!(config.ranking_limit.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.timeout().is_none());
    }

    #[test]
    fn origin_strips_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://98.95.87.20/".into(),
            ..Default::default()
        };
        assert_eq!(config.origin(), "http://98.95.87.20");
    }

    #[test]
    fn rejects_non_http_origin() {
        let config = ApiConfig {
            base_url: "ftp://scoring".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "api.base_url"
        ));
    }

    #[test]
    fn rejects_zero_ranking_limit() {
        let config = ApiConfig {
            ranking_limit: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
