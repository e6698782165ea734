use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{NewTask, Task, UpdateTaskData};
use crate::modules::task::application::ports::incoming::use_cases::{
    CreateTaskUseCase, DeleteTaskUseCase, GetTaskUseCase, ListTasksUseCase, TaskUseCaseError,
    ToggleTaskUseCase, UpdateTaskUseCase,
};
use crate::modules::task::application::ports::outgoing::{TaskQuery, TaskRepository};

// ============================================================================
// Read services
// ============================================================================

pub struct ListTasksService<Q>
where
    Q: TaskQuery,
{
    query: Q,
}

impl<Q> ListTasksService<Q>
where
    Q: TaskQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTasksUseCase for ListTasksService<Q>
where
    Q: TaskQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<Task>, TaskUseCaseError> {
        self.query
            .list_tasks(owner)
            .await
            .map_err(TaskUseCaseError::from)
    }
}

pub struct GetTaskService<Q>
where
    Q: TaskQuery,
{
    query: Q,
}

impl<Q> GetTaskService<Q>
where
    Q: TaskQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTaskUseCase for GetTaskService<Q>
where
    Q: TaskQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId, task_id: i32) -> Result<Task, TaskUseCaseError> {
        self.query
            .get_by_id(owner, task_id)
            .await
            .map_err(TaskUseCaseError::from)
    }
}

// ============================================================================
// Write services
// ============================================================================

pub struct CreateTaskService<R>
where
    R: TaskRepository,
{
    repo: R,
}

impl<R> CreateTaskService<R>
where
    R: TaskRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> CreateTaskUseCase for CreateTaskService<R>
where
    R: TaskRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, data: NewTask) -> Result<Task, TaskUseCaseError> {
        data.validate()?;

        let task = self.repo.create_task(owner, data).await?;
        info!(user_id = %owner, task_id = task.id, steps = task.steps.len(), "Task created");
        Ok(task)
    }
}

pub struct UpdateTaskService<R>
where
    R: TaskRepository,
{
    repo: R,
}

impl<R> UpdateTaskService<R>
where
    R: TaskRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpdateTaskUseCase for UpdateTaskService<R>
where
    R: TaskRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        data: UpdateTaskData,
    ) -> Result<Task, TaskUseCaseError> {
        data.validate()?;

        self.repo
            .update_task(owner, data)
            .await
            .map_err(TaskUseCaseError::from)
    }
}

pub struct ToggleTaskService<R>
where
    R: TaskRepository,
{
    repo: R,
}

impl<R> ToggleTaskService<R>
where
    R: TaskRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ToggleTaskUseCase for ToggleTaskService<R>
where
    R: TaskRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, task_id: i32) -> Result<Task, TaskUseCaseError> {
        self.repo
            .toggle_task(owner, task_id)
            .await
            .map_err(TaskUseCaseError::from)
    }
}

pub struct DeleteTaskService<R>
where
    R: TaskRepository,
{
    repo: R,
}

impl<R> DeleteTaskService<R>
where
    R: TaskRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteTaskUseCase for DeleteTaskService<R>
where
    R: TaskRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, task_id: i32) -> Result<(), TaskUseCaseError> {
        self.repo.delete_task(owner, task_id).await?;
        info!(user_id = %owner, task_id, "Task deleted");
        Ok(())
    }
}
