use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::filter::{PageRequest, TaskFilter, TaskPage};
use crate::modules::task::application::ports::outgoing::TaskQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FilterTasksError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<TaskQueryError> for FilterTasksError {
    fn from(err: TaskQueryError) -> Self {
        FilterTasksError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait FilterTasksUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        filter: TaskFilter,
        page: PageRequest,
    ) -> Result<TaskPage, FilterTasksError>;
}
