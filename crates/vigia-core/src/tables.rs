//! Lookup-table entries for the query interpreter.
//!
//! Tables are plain data so they can be edited in configuration. Order is
//! significant: the interpreter evaluates entries first-match-wins.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AccidentType;

/// A place-name synonym and the canonical pair it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComunaAlias {
    /// Normalized (lowercase, unaccented) substring to look for.
    pub alias: String,
    pub comuna: String,
    pub region: String,
}

impl ComunaAlias {
    #[must_use]
    pub fn new(alias: &str, comuna: &str, region: &str) -> Self {
        Self {
            alias: alias.to_string(),
            comuna: comuna.to_string(),
            region: region.to_string(),
        }
    }
}

/// Keywords that identify one accident category as whole words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordGroup {
    pub category: AccidentType,
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    #[must_use]
    pub fn new(category: AccidentType, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}
