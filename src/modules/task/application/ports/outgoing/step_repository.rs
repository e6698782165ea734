use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Step, StepDraft};

#[derive(Debug, Clone, thiserror::Error)]
pub enum StepRepositoryError {
    /// Parent task missing or owned by someone else.
    #[error("Task not found")]
    TaskNotFound,

    #[error("Step not found")]
    StepNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Step writes, guarded by the parent task's owner.
#[async_trait]
pub trait StepRepository: Send + Sync {
    async fn add_step(
        &self,
        owner: UserId,
        task_id: i32,
        step: StepDraft,
    ) -> Result<Step, StepRepositoryError>;

    /// Replaces the content of the step matching both ids.
    async fn update_step(
        &self,
        owner: UserId,
        task_id: i32,
        step_id: i32,
        content: String,
    ) -> Result<Step, StepRepositoryError>;

    async fn toggle_step(&self, owner: UserId, step_id: i32) -> Result<Step, StepRepositoryError>;

    async fn delete_step(
        &self,
        owner: UserId,
        task_id: i32,
        step_id: i32,
    ) -> Result<(), StepRepositoryError>;
}
