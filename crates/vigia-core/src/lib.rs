//! # vigia-core
//!
//! Core types and response decoding for Vigia.
//!
//! This crate provides the foundational types shared across all Vigia crates:
//! - The structured prediction request built from a free-text query
//! - Closed enums for accident categories, proposal priorities and risk levels
//! - Dashboard records (KPI snapshot, temporal series, map points, routes, ranking)
//! - Decode-with-defaults records for every scoring-service response
//! - Lookup-table entry types consumed by the query interpreter
//! - Cross-cutting error types

pub mod dashboard;
pub mod enums;
pub mod errors;
pub mod proposal;
pub mod request;
pub mod responses;
pub mod tables;

pub use dashboard::{
    ComunaRanking, CriticalPoint, CriticalRoute, Kpi, KpiValue, ScorePoint, TemporalSeries,
};
pub use enums::{AccidentType, Priority, RiskLevel};
pub use errors::CoreError;
pub use proposal::Proposal;
pub use request::StructuredRequest;
pub use responses::{PredictionResponse, ServiceStatus};
pub use tables::{ComunaAlias, KeywordGroup};
