use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::batch::TaskBatchPatch;
use crate::modules::task::application::domain::entities::{NewTask, Task, UpdateTaskData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TaskRepositoryError {
    /// Missing row or a row owned by someone else.
    #[error("Task not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Write side of the task store. Every method is scoped to `owner`.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts the task and its steps in one transaction.
    async fn create_task(&self, owner: UserId, data: NewTask) -> Result<Task, TaskRepositoryError>;

    /// Overwrites title/description when present and replaces the step set
    /// when `data.steps` is `Some`, all in one transaction.
    async fn update_task(
        &self,
        owner: UserId,
        data: UpdateTaskData,
    ) -> Result<Task, TaskRepositoryError>;

    /// Flips `done`; stamps `completed_at` when it becomes true.
    async fn toggle_task(&self, owner: UserId, task_id: i32) -> Result<Task, TaskRepositoryError>;

    /// Steps go with the task through the FK cascade.
    async fn delete_task(&self, owner: UserId, task_id: i32) -> Result<(), TaskRepositoryError>;

    /// `true` iff every id in `task_ids` (deduplicated) belongs to `owner`.
    async fn validate_ownership(
        &self,
        owner: UserId,
        task_ids: &[i32],
    ) -> Result<bool, TaskRepositoryError>;

    /// One UPDATE for the whole set; returns the updated rows.
    async fn batch_update(
        &self,
        owner: UserId,
        task_ids: &[i32],
        patch: TaskBatchPatch,
    ) -> Result<Vec<Task>, TaskRepositoryError>;

    /// One DELETE for the whole set; returns the number of rows removed.
    async fn batch_delete(
        &self,
        owner: UserId,
        task_ids: &[i32],
    ) -> Result<u64, TaskRepositoryError>;
}
