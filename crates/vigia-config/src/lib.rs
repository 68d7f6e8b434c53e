//! # vigia-config
//!
//! Layered configuration loading for Vigia using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VIGIA_*` prefix, `__` as separator)
//! 2. Project-level `.vigia/config.toml`
//! 3. User-level `~/.config/vigia/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VIGIA_API__BASE_URL` -> `api.base_url`,
//! `VIGIA_ADVISOR__MAX_DRIVERS` -> `advisor.max_drivers`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use vigia_config::VigiaConfig;
//!
//! let config = VigiaConfig::load_with_dotenv().expect("config");
//! println!("scoring service: {}", config.api.origin());
//! ```

mod advisor;
mod api;
mod error;
mod query;

pub use advisor::AdvisorConfig;
pub use api::ApiConfig;
pub use error::ConfigError;
pub use query::QueryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VigiaConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

impl VigiaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".vigia/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VIGIA_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.query.validate()?;
        if self.advisor.max_drivers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "advisor.max_drivers".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vigia").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = VigiaConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.query.uses_builtin_aliases());
        assert!(config.query.uses_builtin_keywords());
        assert_eq!(config.advisor.max_drivers, 5);
    }

    #[test]
    fn zero_max_drivers_is_rejected() {
        let mut config = VigiaConfig::default();
        config.advisor.max_drivers = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "advisor.max_drivers"
        ));
    }
}
