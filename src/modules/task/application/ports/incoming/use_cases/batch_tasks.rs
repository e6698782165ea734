use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::batch::TaskBatchPatch;
use crate::modules::task::application::domain::entities::{Task, TaskValidationError};
use crate::modules::task::application::ports::outgoing::TaskRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchTasksError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// At least one id is missing or belongs to another user.
    #[error("Some tasks do not belong to the caller")]
    NotOwned,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TaskValidationError> for BatchTasksError {
    fn from(err: TaskValidationError) -> Self {
        BatchTasksError::Validation(err.to_string())
    }
}

impl From<TaskRepositoryError> for BatchTasksError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound => BatchTasksError::NotOwned,
            TaskRepositoryError::DatabaseError(msg)
            | TaskRepositoryError::SerializationError(msg) => {
                BatchTasksError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait BatchUpdateTasksUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        task_ids: Vec<i32>,
        patch: TaskBatchPatch,
    ) -> Result<Vec<Task>, BatchTasksError>;
}

#[async_trait]
pub trait BatchDeleteTasksUseCase: Send + Sync {
    /// Returns the deleted ids.
    async fn execute(&self, owner: UserId, task_ids: Vec<i32>)
        -> Result<Vec<i32>, BatchTasksError>;
}
