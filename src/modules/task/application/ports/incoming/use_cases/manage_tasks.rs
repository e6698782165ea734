use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{
    NewTask, Task, TaskValidationError, UpdateTaskData,
};
use crate::modules::task::application::ports::outgoing::{TaskQueryError, TaskRepositoryError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskUseCaseError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Also returned for tasks owned by another user.
    #[error("Task not found")]
    TaskNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TaskValidationError> for TaskUseCaseError {
    fn from(err: TaskValidationError) -> Self {
        TaskUseCaseError::Validation(err.to_string())
    }
}

impl From<TaskRepositoryError> for TaskUseCaseError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound => TaskUseCaseError::TaskNotFound,
            TaskRepositoryError::DatabaseError(msg)
            | TaskRepositoryError::SerializationError(msg) => {
                TaskUseCaseError::RepositoryError(msg)
            }
        }
    }
}

impl From<TaskQueryError> for TaskUseCaseError {
    fn from(err: TaskQueryError) -> Self {
        match err {
            TaskQueryError::NotFound => TaskUseCaseError::TaskNotFound,
            TaskQueryError::DatabaseError(msg) => TaskUseCaseError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Ports
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListTasksUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<Task>, TaskUseCaseError>;
}

#[async_trait]
pub trait GetTaskUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, task_id: i32) -> Result<Task, TaskUseCaseError>;
}

#[async_trait]
pub trait CreateTaskUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, data: NewTask) -> Result<Task, TaskUseCaseError>;
}

#[async_trait]
pub trait UpdateTaskUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, data: UpdateTaskData)
        -> Result<Task, TaskUseCaseError>;
}

#[async_trait]
pub trait ToggleTaskUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, task_id: i32) -> Result<Task, TaskUseCaseError>;
}

#[async_trait]
pub trait DeleteTaskUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, task_id: i32) -> Result<(), TaskUseCaseError>;
}
