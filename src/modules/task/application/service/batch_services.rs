use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::batch::{dedup_ids, TaskBatchPatch};
use crate::modules::task::application::domain::entities::Task;
use crate::modules::task::application::ports::incoming::use_cases::{
    BatchDeleteTasksUseCase, BatchTasksError, BatchUpdateTasksUseCase,
};
use crate::modules::task::application::ports::outgoing::TaskRepository;

/// Deduplicates and checks that every id belongs to `owner`.
async fn guard_ids<R>(repo: &R, owner: UserId, task_ids: &[i32]) -> Result<Vec<i32>, BatchTasksError>
where
    R: TaskRepository,
{
    let ids = dedup_ids(task_ids);
    if ids.is_empty() {
        return Err(BatchTasksError::Validation(
            "No task ids provided".to_string(),
        ));
    }

    if !repo.validate_ownership(owner, &ids).await? {
        warn!(user_id = %owner, count = ids.len(), "Batch rejected: foreign or missing tasks");
        return Err(BatchTasksError::NotOwned);
    }

    Ok(ids)
}

pub struct BatchUpdateTasksService<R>
where
    R: TaskRepository,
{
    repo: R,
}

impl<R> BatchUpdateTasksService<R>
where
    R: TaskRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> BatchUpdateTasksUseCase for BatchUpdateTasksService<R>
where
    R: TaskRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        task_ids: Vec<i32>,
        patch: TaskBatchPatch,
    ) -> Result<Vec<Task>, BatchTasksError> {
        if patch.is_empty() {
            return Err(BatchTasksError::Validation(
                "No valid update fields provided".to_string(),
            ));
        }
        patch.validate()?;

        let ids = guard_ids(&self.repo, owner, &task_ids).await?;
        let tasks = self.repo.batch_update(owner, &ids, patch).await?;

        info!(user_id = %owner, count = tasks.len(), "Tasks batch-updated");
        Ok(tasks)
    }
}

pub struct BatchDeleteTasksService<R>
where
    R: TaskRepository,
{
    repo: R,
}

impl<R> BatchDeleteTasksService<R>
where
    R: TaskRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> BatchDeleteTasksUseCase for BatchDeleteTasksService<R>
where
    R: TaskRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        task_ids: Vec<i32>,
    ) -> Result<Vec<i32>, BatchTasksError> {
        let ids = guard_ids(&self.repo, owner, &task_ids).await?;
        let deleted = self.repo.batch_delete(owner, &ids).await?;

        info!(user_id = %owner, deleted, "Tasks batch-deleted");
        Ok(ids)
    }
}
