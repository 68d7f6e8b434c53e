//! Query interpretation tables.

use serde::{Deserialize, Serialize};
use vigia_core::{ComunaAlias, KeywordGroup};

use crate::error::ConfigError;

fn default_comuna() -> String {
    String::from("SANTIAGO")
}

fn default_region() -> String {
    String::from("METROPOLITANA")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Ordered place aliases. Empty means the built-in table.
    #[serde(default)]
    pub comuna_aliases: Vec<ComunaAlias>,

    /// Ordered accident keyword groups. Empty means the built-in table.
    #[serde(default)]
    pub accident_keywords: Vec<KeywordGroup>,

    /// Comuna used when no alias matches.
    #[serde(default = "default_comuna")]
    pub default_comuna: String,

    /// Region used when no alias matches.
    #[serde(default = "default_region")]
    pub default_region: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            comuna_aliases: Vec::new(),
            accident_keywords: Vec::new(),
            default_comuna: default_comuna(),
            default_region: default_region(),
        }
    }
}

impl QueryConfig {
    #[must_use]
    pub fn uses_builtin_aliases(&self) -> bool {
        self.comuna_aliases.is_empty()
    }

    #[must_use]
    pub fn uses_builtin_keywords(&self) -> bool {
        self.accident_keywords.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.default_comuna.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "query.default_comuna".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.default_region.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "query.default_region".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
