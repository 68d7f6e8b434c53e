//! Records consumed by the dashboard renderers.
//!
//! Field names follow the camelCase shape the renderers read.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::RiskLevel;

/// One KPI figure and its change relative to the previous period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KpiValue {
    pub value: i64,
    pub delta_pct: f64,
}

impl KpiValue {
    /// A value with no computed delta.
    #[must_use]
    pub const fn flat(value: i64) -> Self {
        Self {
            value,
            delta_pct: 0.0,
        }
    }
}

/// KPI snapshot: accidents, victims and applied improvements.
///
/// `Default` is the zeroed snapshot shown before the first successful prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Kpi {
    pub accidents: KpiValue,
    pub victims: KpiValue,
    pub improvements: KpiValue,
}

/// A single `(timestamp, score)` sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScorePoint {
    pub t: String,
    pub v: f64,
}

/// Temporal series handed to the chart renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemporalSeries {
    pub score_series: Vec<ScorePoint>,
}

/// A geolocated critical point shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriticalPoint {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub risk: RiskLevel,
    pub probability: f64,
    pub road_type: String,
    pub region: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeband: Option<String>,
}

/// A ranked road segment for the routes table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CriticalRoute {
    pub id: String,
    pub label: String,
    pub risk: RiskLevel,
    pub score: f64,
}

/// Per-comuna model reliability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComunaRanking {
    pub comuna: String,
    pub auroc: f64,
}

impl ComunaRanking {
    /// Decode a ranking response body with defaults.
    ///
    /// A body that is not an array yields an empty list. Entries that are not
    /// objects or have no string `comuna` are dropped; a missing or non-numeric
    /// `auroc` becomes `0.0`. Order is preserved.
    #[must_use]
    pub fn list_from_value(value: &Value) -> Vec<Self> {
        let Some(items) = value.as_array() else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| {
                let comuna = item.get("comuna")?.as_str()?.to_string();
                let auroc = item.get("auroc").and_then(Value::as_f64).unwrap_or(0.0);
                Some(Self { comuna, auroc })
            })
            .collect()
    }
}
