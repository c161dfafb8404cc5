// HTTP adapter for the readings feed
use crate::application::feed::ReadingsFeed;
use crate::domain::errors::{DashboardError, DashboardResult};
use crate::domain::record::FeedRecord;
use async_trait::async_trait;
use std::time::Duration;

/// Fetches the feed with a single GET; the response must be a JSON array
/// of flat records.
#[derive(Debug, Clone)]
pub struct HttpReadingsFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpReadingsFeed {
    pub fn new(url: String, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl ReadingsFeed for HttpReadingsFeed {
    async fn fetch_records(&self) -> DashboardResult<Vec<FeedRecord>> {
        tracing::debug!("Fetching readings from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DashboardError::Fetch(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DashboardError::Fetch(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        response
            .json::<Vec<FeedRecord>>()
            .await
            .map_err(|e| DashboardError::Fetch(format!("invalid feed payload: {e}")))
    }
}
