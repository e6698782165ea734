use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Step, StepDraft, TaskValidationError};
use crate::modules::task::application::ports::outgoing::StepRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepUseCaseError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Task not found")]
    TaskNotFound,

    #[error("Step not found")]
    StepNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TaskValidationError> for StepUseCaseError {
    fn from(err: TaskValidationError) -> Self {
        StepUseCaseError::Validation(err.to_string())
    }
}

impl From<StepRepositoryError> for StepUseCaseError {
    fn from(err: StepRepositoryError) -> Self {
        match err {
            StepRepositoryError::TaskNotFound => StepUseCaseError::TaskNotFound,
            StepRepositoryError::StepNotFound => StepUseCaseError::StepNotFound,
            StepRepositoryError::DatabaseError(msg) => StepUseCaseError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait AddStepUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        task_id: i32,
        step: StepDraft,
    ) -> Result<Step, StepUseCaseError>;
}

#[async_trait]
pub trait UpdateStepUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        task_id: i32,
        step_id: i32,
        content: String,
    ) -> Result<Step, StepUseCaseError>;
}

#[async_trait]
pub trait ToggleStepUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, step_id: i32) -> Result<Step, StepUseCaseError>;
}

#[async_trait]
pub trait DeleteStepUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        task_id: i32,
        step_id: i32,
    ) -> Result<(), StepUseCaseError>;
}
