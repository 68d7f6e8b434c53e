//! Session state consumed by the dashboard renderers.

use serde::Serialize;
use vigia_core::{
    ComunaRanking, CriticalPoint, CriticalRoute, Kpi, Proposal, TemporalSeries,
};

/// Message shown when a prediction call fails for any reason.
pub const PREDICTION_ERROR: &str =
    "No se pudo conectar con el backend o el formato de respuesta no es válido.";

/// Message shown when a ranking call fails for any reason.
pub const RANKING_ERROR: &str = "No se pudo obtener el ranking de comunas.";

/// Where one call family currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPhase {
    /// Nothing in flight; the last call (if any) succeeded.
    Idle,
    Loading,
    /// Nothing in flight; the last applied call failed.
    Failed,
}

/// `{loading, error}` pair for one call family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallState {
    pub loading: bool,
    pub error: Option<String>,
}

impl CallState {
    #[must_use]
    pub const fn phase(&self) -> CallPhase {
        if self.loading {
            CallPhase::Loading
        } else if self.error.is_some() {
            CallPhase::Failed
        } else {
            CallPhase::Idle
        }
    }

    pub(crate) fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn succeed(&mut self) {
        self.loading = false;
    }

    pub(crate) fn fail(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(message.to_string());
    }
}

/// Everything the renderers read.
///
/// Prediction-owned fields: `query`, `prediction`, `kpi`, `proposals`,
/// `temporal`, `points`, `routes`. Ranking-owned fields: `ranking`,
/// `ranking_call`. `selected` is set by the map collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Latest submitted query text.
    pub query: String,
    pub prediction: CallState,
    pub kpi: Kpi,
    pub proposals: Vec<Proposal>,
    /// `None` until the first successful prediction.
    pub temporal: Option<TemporalSeries>,
    pub points: Vec<CriticalPoint>,
    pub routes: Vec<CriticalRoute>,
    pub ranking: Vec<ComunaRanking>,
    pub ranking_call: CallState,
    pub selected: Option<CriticalPoint>,
}
