use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::stats::TaskStats;
use crate::modules::task::application::ports::outgoing::TaskStatsQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTaskStatsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<TaskStatsQueryError> for GetTaskStatsError {
    fn from(err: TaskStatsQueryError) -> Self {
        match err {
            TaskStatsQueryError::DatabaseError(msg) => GetTaskStatsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetTaskStatsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<TaskStats, GetTaskStatsError>;
}
