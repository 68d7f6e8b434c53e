//! Closed enums shared across Vigia.
//!
//! `AccidentType` serializes in `snake_case` because it travels on the wire as
//! the `tipo_accidente` field. `Priority` and `RiskLevel` keep their Spanish
//! display names, which is what the dashboard renders.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// AccidentType
// ---------------------------------------------------------------------------

/// Accident category expected by the scoring service.
///
/// The set is closed: a structured request never carries free text here.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AccidentType {
    #[default]
    Colision,
    Atropello,
    Volcamiento,
    Incendio,
    Despiste,
}

impl AccidentType {
    /// All categories, in extractor priority order.
    pub const ALL: [Self; 5] = [
        Self::Colision,
        Self::Atropello,
        Self::Volcamiento,
        Self::Incendio,
        Self::Despiste,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Colision => "colision",
            Self::Atropello => "atropello",
            Self::Volcamiento => "volcamiento",
            Self::Incendio => "incendio",
            Self::Despiste => "despiste",
        }
    }
}

impl fmt::Display for AccidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccidentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::UnknownAccidentType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of a mitigation proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Priority {
    Alta,
    Media,
    Baja,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alta => "Alta",
            Self::Media => "Media",
            Self::Baja => "Baja",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Risk level attached to map points and critical routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RiskLevel {
    Alto,
    Medio,
    Bajo,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alto => "Alto",
            Self::Medio => "Medio",
            Self::Bajo => "Bajo",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accident_type_serializes_snake_case() {
        let json = serde_json::to_string(&AccidentType::Volcamiento).unwrap();
        assert_eq!(json, "\"volcamiento\"");
    }

    #[test]
    fn accident_type_parses_every_wire_name() {
        for category in AccidentType::ALL {
            assert_eq!(category.as_str().parse::<AccidentType>(), Ok(category));
        }
    }

    #[test]
    fn accident_type_rejects_free_text() {
        let err = "choque".parse::<AccidentType>().unwrap_err();
        assert_eq!(err, CoreError::UnknownAccidentType("choque".into()));
    }

    #[test]
    fn default_category_is_colision() {
        assert_eq!(AccidentType::default(), AccidentType::Colision);
    }

    #[test]
    fn priority_keeps_display_names_on_the_wire() {
        assert_eq!(serde_json::to_string(&Priority::Media).unwrap(), "\"Media\"");
        assert_eq!(Priority::Alta.to_string(), "Alta");
    }
}
