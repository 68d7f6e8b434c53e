//! Structured prediction request.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AccidentType;

/// Machine-consumable form of a user's free-text risk query.
///
/// This is the JSON body of `POST /api/risk/predict`. `fecha` is always a
/// `YYYY-MM-DD` string, calendar range is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StructuredRequest {
    pub comuna: String,
    pub region: String,
    pub tipo_accidente: AccidentType,
    pub fecha: String,
    pub prompt: String,
}
