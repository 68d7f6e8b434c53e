//! Comuna ranking endpoint.

use vigia_core::ComunaRanking;

use crate::http::{check_response, read_json};
use crate::{ClientError, RANKING_PATH, RiskClient};

impl RiskClient {
    /// Fetch the ranking with `GET /api/risk/comunas/ranking`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the service returns a
    /// non-success status, or the body is not JSON.
    pub async fn comuna_ranking(&self) -> Result<Vec<ComunaRanking>, ClientError> {
        let url = match self.ranking_limit {
            Some(limit) => format!("{}?limit={limit}", self.url(RANKING_PATH)),
            None => self.url(RANKING_PATH),
        };
        let resp = self.http.get(url).send().await?;
        let body = read_json(check_response(resp).await?).await?;
        Ok(ComunaRanking::list_from_value(&body))
    }
}
