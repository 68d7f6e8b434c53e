//! Mitigation proposal synthesized from a scoring-service driver.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Priority;

/// A prioritized, user-facing improvement proposal.
///
/// `id` is only unique within one prediction response. A fresh list replaces
/// the previous one on every successful prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub expected_impact_pct: i64,
    pub eta: String,
    pub cost: String,
    pub tech_details: String,
}
