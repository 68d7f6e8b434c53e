use chrono::{DateTime, Utc};
use vigia_advisor::Advisor;
use vigia_client::{ClientError, RiskApi};
use vigia_core::{ComunaRanking, CriticalPoint, PredictionResponse, StructuredRequest};
use vigia_query::QueryInterpreter;

use crate::sequence::Sequencer;
use crate::state::{PREDICTION_ERROR, RANKING_ERROR, SessionState};

/// How a `finish_*` call was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed,
    /// A newer call of the same family was begun; the result was discarded.
    Stale,
}

/// An in-flight prediction: its sequence number and the request to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionTicket {
    seq: u64,
    request: StructuredRequest,
}

impl PredictionTicket {
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub const fn request(&self) -> &StructuredRequest {
        &self.request
    }
}

/// An in-flight ranking fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingTicket {
    seq: u64,
}

impl RankingTicket {
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }
}

/// Session orchestrator.
///
/// The only writer of [`SessionState`]. Prediction and ranking own disjoint
/// fields, so their calls can be in flight together without locking.
pub struct Session<A> {
    api: A,
    interpreter: QueryInterpreter,
    advisor: Advisor,
    state: SessionState,
    predictions: Sequencer,
    rankings: Sequencer,
}

impl<A: RiskApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            interpreter: QueryInterpreter::default(),
            advisor: Advisor::default(),
            state: SessionState::default(),
            predictions: Sequencer::default(),
            rankings: Sequencer::default(),
        }
    }

    #[must_use]
    pub fn with_interpreter(mut self, interpreter: QueryInterpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    #[must_use]
    pub const fn with_advisor(mut self, advisor: Advisor) -> Self {
        self.advisor = advisor;
        self
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    // ── Prediction ─────────────────────────────────────────────────

    /// Record `raw` as the current query, clear the prior error, enter
    /// `Loading` and build the request to send.
    pub fn begin_prediction(&mut self, raw: &str) -> PredictionTicket {
        self.state.query = raw.to_string();
        self.state.prediction.begin();
        PredictionTicket {
            seq: self.predictions.issue(),
            request: self.interpreter.interpret(raw),
        }
    }

    /// Apply a prediction result, stamping a timestamp-less series with now.
    pub fn finish_prediction(
        &mut self,
        ticket: &PredictionTicket,
        result: Result<PredictionResponse, ClientError>,
    ) -> Completion {
        self.finish_prediction_at(ticket, result, Utc::now())
    }

    /// Apply a prediction result.
    ///
    /// On success the KPI snapshot, proposals and temporal series are
    /// replaced wholesale and points/routes are cleared. On failure only the
    /// error message is set. A stale ticket changes nothing.
    pub fn finish_prediction_at(
        &mut self,
        ticket: &PredictionTicket,
        result: Result<PredictionResponse, ClientError>,
        now: DateTime<Utc>,
    ) -> Completion {
        if !self.predictions.is_current(ticket.seq) {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.predictions.latest(),
                "discarding stale prediction result"
            );
            return Completion::Stale;
        }

        match result {
            Ok(response) => {
                let advisory = self.advisor.advise(&response, now);
                self.state.kpi = advisory.kpi;
                self.state.proposals = advisory.proposals;
                self.state.temporal = Some(advisory.temporal);
                self.state.points.clear();
                self.state.routes.clear();
                self.state.prediction.succeed();
                Completion::Succeeded
            }
            Err(error) => {
                tracing::warn!(%error, status = ?error.status(), "prediction call failed");
                self.state.prediction.fail(PREDICTION_ERROR);
                Completion::Failed
            }
        }
    }

    /// Submit `raw` and wait for its prediction.
    pub async fn submit(&mut self, raw: &str) -> Completion {
        let ticket = self.begin_prediction(raw);
        let result = self.api.predict(ticket.request()).await;
        self.finish_prediction(&ticket, result)
    }

    // ── Ranking ────────────────────────────────────────────────────

    /// Clear the prior ranking error and enter `Loading`.
    pub fn begin_ranking(&mut self) -> RankingTicket {
        self.state.ranking_call.begin();
        RankingTicket {
            seq: self.rankings.issue(),
        }
    }

    /// Apply a ranking result. On success the list is replaced wholesale; on
    /// failure the previous list is kept and only the error is set.
    pub fn finish_ranking(
        &mut self,
        ticket: RankingTicket,
        result: Result<Vec<ComunaRanking>, ClientError>,
    ) -> Completion {
        if !self.rankings.is_current(ticket.seq) {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.rankings.latest(),
                "discarding stale ranking result"
            );
            return Completion::Stale;
        }

        match result {
            Ok(ranking) => {
                self.state.ranking = ranking;
                self.state.ranking_call.succeed();
                Completion::Succeeded
            }
            Err(error) => {
                tracing::warn!(%error, status = ?error.status(), "ranking call failed");
                self.state.ranking_call.fail(RANKING_ERROR);
                Completion::Failed
            }
        }
    }

    /// Fetch the ranking and wait for it.
    pub async fn refresh_ranking(&mut self) -> Completion {
        let ticket = self.begin_ranking();
        let result = self.api.ranking().await;
        self.finish_ranking(ticket, result)
    }

    // ── Session start ──────────────────────────────────────────────

    /// Session start: fetch the ranking and, if given, submit a first query,
    /// with both calls in flight at once.
    ///
    /// Returns the ranking completion and the prediction completion.
    pub async fn start(&mut self, initial_query: Option<&str>) -> (Completion, Option<Completion>) {
        let ranking_ticket = self.begin_ranking();
        let prediction_ticket = initial_query.map(|raw| self.begin_prediction(raw));

        let api = &self.api;
        let (ranking, prediction) = tokio::join!(api.ranking(), async {
            match &prediction_ticket {
                Some(ticket) => Some(api.predict(ticket.request()).await),
                None => None,
            }
        });

        let ranking = self.finish_ranking(ranking_ticket, ranking);
        let prediction = prediction_ticket
            .zip(prediction)
            .map(|(ticket, result)| self.finish_prediction(&ticket, result));
        (ranking, prediction)
    }

    // ── Selection ──────────────────────────────────────────────────

    /// Select a map point. A later selection overwrites it.
    pub fn select_point(&mut self, point: CriticalPoint) {
        self.state.selected = Some(point);
    }
}
