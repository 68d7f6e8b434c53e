//! Shared HTTP response helpers.
//!
//! Every endpoint goes through the same two steps: reject non-success
//! statuses, then parse the body as JSON. Field-level decoding with defaults
//! happens afterwards in `vigia-core`.

use serde_json::Value;

use crate::error::ClientError;

/// Return the response unchanged on success, else [`ClientError::Api`] with
/// the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the body and parse it as JSON.
pub async fn read_json(resp: reqwest::Response) -> Result<Value, ClientError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let resp = mock_response(500, "model not loaded");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api { status: 500, ref message } if message == "model not loaded"
        ));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn read_json_rejects_non_json() {
        let resp = mock_response(200, "<html>proxy error</html>");
        let err = read_json(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[tokio::test]
    async fn read_json_rejects_empty_body() {
        let resp = mock_response(200, "");
        assert!(matches!(read_json(resp).await, Err(ClientError::Parse(_))));
    }

    #[tokio::test]
    async fn read_json_accepts_any_json_value() {
        let resp = mock_response(200, "null");
        assert_eq!(read_json(resp).await.unwrap(), Value::Null);
    }
}
