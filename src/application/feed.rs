// Port for the readings feed
use crate::domain::errors::DashboardResult;
use crate::domain::record::FeedRecord;
use async_trait::async_trait;

#[async_trait]
pub trait ReadingsFeed: Send + Sync {
    /// Fetch the full list of readings. The feed is read once per load
    /// cycle; failures are terminal for that cycle (no retry).
    async fn fetch_records(&self) -> DashboardResult<Vec<FeedRecord>>;
}
