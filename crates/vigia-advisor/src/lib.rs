//! # vigia-advisor
//!
//! Converts a decoded [`PredictionResponse`] into what the dashboard shows:
//! - one [`Proposal`] per driver ([`build_proposal`]), capped at
//!   [`DEFAULT_MAX_DRIVERS`]
//! - the KPI snapshot ([`derive_kpi`])
//! - a single-point temporal series ([`score_series`])
//!
//! Everything here is pure: identical inputs give identical outputs.
//!
//! [`PredictionResponse`]: vigia_core::PredictionResponse
//! [`Proposal`]: vigia_core::Proposal

mod advisory;
mod kpi;
mod proposals;
mod rounding;

pub use advisory::{Advisor, Advisory, DEFAULT_MAX_DRIVERS};
pub use kpi::{HIGH_RISK_LEVEL, derive_kpi, score_series};
pub use proposals::{
    PROPOSAL_ETA, PROPOSAL_TECH_DETAILS, build_proposal, priority_for, synthesize,
};
pub use rounding::round_half_up;
