use chrono::{DateTime, Utc};
use serde::Serialize;
use vigia_core::{Kpi, PredictionResponse, Proposal, TemporalSeries};

use crate::kpi::{derive_kpi, score_series};
use crate::proposals::synthesize;

/// Number of drivers turned into proposals.
pub const DEFAULT_MAX_DRIVERS: usize = 5;

/// Everything derived from one successful prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub kpi: Kpi,
    pub proposals: Vec<Proposal>,
    pub temporal: TemporalSeries,
}

/// Synthesizes an [`Advisory`] from a decoded prediction response.
#[derive(Debug, Clone, Copy)]
pub struct Advisor {
    max_drivers: usize,
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DRIVERS)
    }
}

impl Advisor {
    #[must_use]
    pub const fn new(max_drivers: usize) -> Self {
        Self { max_drivers }
    }

    #[must_use]
    pub const fn max_drivers(&self) -> usize {
        self.max_drivers
    }

    /// Derive the KPI snapshot, proposals and temporal series. `now` stamps
    /// the series when the response carries no timestamp.
    #[must_use]
    pub fn advise(&self, response: &PredictionResponse, now: DateTime<Utc>) -> Advisory {
        let score = response.risk_score;
        Advisory {
            kpi: derive_kpi(score, &response.risk_level),
            proposals: synthesize(&response.drivers, score, self.max_drivers),
            temporal: score_series(response.timestamp.as_deref(), score, now),
        }
    }
}
