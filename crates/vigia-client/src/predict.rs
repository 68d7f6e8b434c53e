//! Prediction endpoint.

use vigia_core::{PredictionResponse, StructuredRequest};

use crate::http::{check_response, read_json};
use crate::{ClientError, PREDICT_PATH, RiskClient};

impl RiskClient {
    /// Score `request` with `POST /api/risk/predict`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the service returns a
    /// non-success status, or the body is not JSON.
    pub async fn predict_risk(
        &self,
        request: &StructuredRequest,
    ) -> Result<PredictionResponse, ClientError> {
        tracing::debug!(?request, "sending prediction request");
        let resp = self
            .http
            .post(self.url(PREDICT_PATH))
            .json(request)
            .send()
            .await?;
        let body = read_json(check_response(resp).await?).await?;
        Ok(PredictionResponse::from_value(&body))
    }
}
