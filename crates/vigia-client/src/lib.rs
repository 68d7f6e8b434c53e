//! # vigia-client
//!
//! HTTP client for the risk scoring service.
//!
//! Endpoints (relative to a configurable origin):
//! - `POST /api/risk/predict`: score a [`StructuredRequest`]
//! - `GET /api/risk/comunas/ranking`: per-comuna AUROC ranking
//! - `GET /api/risk/status`: model availability probe
//!
//! Responses are decoded with defaults (see `vigia_core::responses`); only a
//! non-success status or a body that is not JSON is an error.
//!
//! [`StructuredRequest`]: vigia_core::StructuredRequest

mod error;
mod http;
mod predict;
mod ranking;
mod status;

pub use error::ClientError;

use std::future::Future;
use std::time::Duration;

use vigia_core::{ComunaRanking, PredictionResponse, StructuredRequest};

pub const PREDICT_PATH: &str = "/api/risk/predict";
pub const RANKING_PATH: &str = "/api/risk/comunas/ranking";
pub const STATUS_PATH: &str = "/api/risk/status";

// ── Seam ───────────────────────────────────────────────────────────

/// The two remote call families the session orchestrator issues.
pub trait RiskApi {
    /// Score one structured request.
    fn predict(
        &self,
        request: &StructuredRequest,
    ) -> impl Future<Output = Result<PredictionResponse, ClientError>> + Send;

    /// Fetch the comuna ranking, in service order.
    fn ranking(&self) -> impl Future<Output = Result<Vec<ComunaRanking>, ClientError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the scoring service.
#[derive(Debug, Clone)]
pub struct RiskClient {
    http: reqwest::Client,
    origin: String,
    ranking_limit: Option<u32>,
}

impl RiskClient {
    /// Create a client for `origin` (e.g. `http://127.0.0.1:8000`).
    ///
    /// `timeout` bounds each request at the transport level; `None` leaves
    /// requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(origin: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent("vigia/0.1");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            origin: origin.trim_end_matches('/').to_string(),
            ranking_limit: None,
        })
    }

    /// Ask the ranking endpoint for at most `limit` entries.
    #[must_use]
    pub const fn with_ranking_limit(mut self, limit: Option<u32>) -> Self {
        self.ranking_limit = limit;
        self
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }
}

impl RiskApi for RiskClient {
    async fn predict(&self, request: &StructuredRequest) -> Result<PredictionResponse, ClientError> {
        self.predict_risk(request).await
    }

    async fn ranking(&self) -> Result<Vec<ComunaRanking>, ClientError> {
        self.comuna_ranking().await
    }
}
