use async_trait::async_trait;
use chrono::NaiveDate;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::stats::StatsSnapshot;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TaskStatsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TaskStatsQuery: Send + Sync {
    /// Aggregates for `owner` with `today` (UTC) as the reference day.
    async fn snapshot(
        &self,
        owner: UserId,
        today: NaiveDate,
    ) -> Result<StatsSnapshot, TaskStatsQueryError>;
}
