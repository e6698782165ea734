use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Step, Task};
use crate::modules::task::application::domain::filter::{PageRequest, TaskFilter, TaskPage};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TaskQueryError {
    #[error("Task not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the task store. Returned tasks carry their steps; a failed
/// step read degrades to an empty step list instead of an error.
#[async_trait]
pub trait TaskQuery: Send + Sync {
    /// Newest first.
    async fn list_tasks(&self, owner: UserId) -> Result<Vec<Task>, TaskQueryError>;

    async fn get_by_id(&self, owner: UserId, task_id: i32) -> Result<Task, TaskQueryError>;

    /// Ordered by id.
    async fn get_steps_by_task_id(&self, task_id: i32) -> Result<Vec<Step>, TaskQueryError>;

    async fn filter(
        &self,
        owner: UserId,
        filter: TaskFilter,
        page: PageRequest,
    ) -> Result<TaskPage, TaskQueryError>;
}
