//! Model status probe.

use vigia_core::ServiceStatus;

use crate::http::{check_response, read_json};
use crate::{ClientError, RiskClient, STATUS_PATH};

impl RiskClient {
    /// Probe `GET /api/risk/status`. The service answers 503 while its models
    /// are not loaded.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the service returns a
    /// non-success status, or the body is not JSON.
    pub async fn status(&self) -> Result<ServiceStatus, ClientError> {
        let resp = self.http.get(self.url(STATUS_PATH)).send().await?;
        let body = read_json(check_response(resp).await?).await?;
        Ok(ServiceStatus::from_value(&body))
    }
}
