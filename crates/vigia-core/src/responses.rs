//! Scoring-service response records, decoded with defaults.
//!
//! Response bodies are untrusted: any field may be absent or ill-typed. Each
//! record here is built from a parsed `serde_json::Value` in one step and is
//! fully populated afterwards, so downstream logic never re-checks absence.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Risk level used when the response carries none.
pub const DEFAULT_RISK_LEVEL: &str = "Bajo";

/// Status reported when the status probe carries none.
pub const UNKNOWN_STATUS: &str = "unknown";

/// Body of `POST /api/risk/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PredictionResponse {
    pub risk_score: f64,
    pub risk_level: String,
    pub drivers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Default for PredictionResponse {
    fn default() -> Self {
        Self {
            risk_score: 0.0,
            risk_level: DEFAULT_RISK_LEVEL.to_string(),
            drivers: Vec::new(),
            timestamp: None,
        }
    }
}

impl PredictionResponse {
    /// Decode a prediction body with defaults.
    ///
    /// - `risk_score`: numbers as-is, numeric strings parsed, booleans as 1/0,
    ///   anything else `0`. Values outside `[0, 1]` are kept.
    /// - `risk_level`: strings as-is, numbers and booleans stringified,
    ///   anything else `"Bajo"`.
    /// - `drivers`: string elements as-is, numbers and booleans stringified,
    ///   other elements dropped; a non-array is an empty list.
    /// - `timestamp`: a non-empty string, otherwise absent.
    ///
    /// Unknown fields are ignored.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let risk_score = value.get("risk_score").map_or(0.0, decode_score);

        let risk_level = value
            .get("risk_level")
            .and_then(scalar_to_string)
            .unwrap_or_else(|| DEFAULT_RISK_LEVEL.to_string());

        let drivers = value
            .get("drivers")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(scalar_to_string).collect())
            .unwrap_or_default();

        let timestamp = value
            .get("timestamp")
            .and_then(Value::as_str)
            .filter(|ts| !ts.is_empty())
            .map(str::to_string);

        Self {
            risk_score,
            risk_level,
            drivers,
            timestamp,
        }
    }
}

/// Body of `GET /api/risk/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceStatus {
    pub status: String,
    pub models_loaded: Value,
    pub metrics: Value,
}

impl Default for ServiceStatus {
    fn default() -> Self {
        Self {
            status: UNKNOWN_STATUS.to_string(),
            models_loaded: Value::Null,
            metrics: Value::Null,
        }
    }
}

impl ServiceStatus {
    /// Decode a status body with defaults. `models_loaded` and `metrics` are
    /// passed through untouched.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            status: value
                .get("status")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_STATUS)
                .to_string(),
            models_loaded: value.get("models_loaded").cloned().unwrap_or(Value::Null),
            metrics: value.get("metrics").cloned().unwrap_or(Value::Null),
        }
    }

    #[must_use]
    pub fn is_operational(&self) -> bool {
        self.status == "operational"
    }
}

fn decode_score(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
