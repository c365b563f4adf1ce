//! HTTP implementation of the prediction store.

use async_trait::async_trait;

use fanxi_core::{HistoryRecord, LockReceipt, LockRequest};

use crate::error::StoreError;
use crate::traits::PredictionStore;

/// Prediction store backed by the FanXI HTTP API.
///
/// One instance per backend; holds a pooled [`reqwest::Client`]. No
/// retries: a failure is reported once and the caller decides.
pub struct HttpPredictionStore {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpPredictionStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Map a non-success response into a [`StoreError::Status`], keeping
    /// the body text for error reporting.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(StoreError::Status {
            code: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl PredictionStore for HttpPredictionStore {
    async fn lock(&self, user_id: i64, request: &LockRequest) -> Result<LockReceipt, StoreError> {
        let url = format!("{}/predictions/lock/{}", self.base_url, user_id);
        log::debug!(
            "locking {} slots for user {} at {}",
            request.lineup.len(),
            user_id,
            url
        );

        let response = self.http_client.post(&url).json(request).send().await?;
        let receipt = Self::check(response).await?.json::<LockReceipt>().await?;

        log::info!("lock acknowledged as record {}", receipt.id);
        Ok(receipt)
    }

    async fn history(&self, user_id: i64) -> Result<Vec<HistoryRecord>, StoreError> {
        let url = format!("{}/predictions/history/{}", self.base_url, user_id);

        let response = self.http_client.get(&url).send().await?;
        let records = Self::check(response)
            .await?
            .json::<Vec<HistoryRecord>>()
            .await?;

        log::debug!("fetched {} history records for user {}", records.len(), user_id);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let store = HttpPredictionStore::new("http://127.0.0.1:8000/");
        assert_eq!(store.base_url, "http://127.0.0.1:8000");
    }
}
